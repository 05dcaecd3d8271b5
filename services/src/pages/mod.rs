//! Full HTML documents.

use maud::{DOCTYPE, Markup, html};

pub mod users_page;

/// Document title and meta description.
pub const TITLE: &str = "Тестовое задание";

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Wrap `content` in the shared document shell.
pub fn layout(content: Markup, version: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                title { (TITLE) }
                meta name="description" content=(TITLE);
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body {
                main.container { (content) }
                footer.container.text-muted.small { (version) }
            }
        }
    }
}
