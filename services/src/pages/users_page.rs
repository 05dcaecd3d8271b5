//! The users page: a load error, or the table with its pagination bar.

use maud::{Markup, html};
use roster_business::{LoadResult, UsersPage};

use super::layout;
use crate::widgets::{alert, pagination, users_table};

pub const HEADING: &str = "Пользователи";

/// Render the page for one load, opened at `requested_page`.
pub fn render(result: LoadResult, requested_page: u32, version: &str) -> Markup {
    if !result.is_ok() {
        return layout(alert::load_error(result.status_code), version);
    }

    let page = UsersPage::open_at(result.users, requested_page);
    layout(content(&page), version)
}

fn content(page: &UsersPage) -> Markup {
    html! {
        h1.mb-5 { (HEADING) }
        (users_table::users_table(page.visible()))
        (pagination::pagination(&page.pagination()))
    }
}
