use maud::{Markup, html};

/// Danger alert shown instead of the table when loading failed.
pub fn load_error(status_code: u16) -> Markup {
    html! {
        div.alert.alert-danger role="alert" {
            "Ошибка " (status_code) " при загрузке данных"
        }
    }
}
