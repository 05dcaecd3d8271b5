//! Pagination bar.
//!
//! Each enabled control is a link back to `/` with the control's target page;
//! disabled controls render as disabled buttons so they cannot navigate.

use maud::{Markup, html};
use roster_business::{PageAction, Pagination};

/// Link to `page` of the users page.
pub fn page_href(page: u32) -> String {
    format!("/?page={page}")
}

fn label(action: PageAction) -> String {
    match action {
        PageAction::First => "«".to_owned(),
        PageAction::Previous => "‹".to_owned(),
        PageAction::Goto(page) => page.to_string(),
        PageAction::Next => "›".to_owned(),
        PageAction::Last => "»".to_owned(),
    }
}

fn aria_label(action: PageAction) -> String {
    match action {
        PageAction::First => "First page".to_owned(),
        PageAction::Previous => "Previous page".to_owned(),
        PageAction::Goto(page) => format!("Page {page}"),
        PageAction::Next => "Next page".to_owned(),
        PageAction::Last => "Last page".to_owned(),
    }
}

pub fn pagination(pagination: &Pagination) -> Markup {
    let current_page = pagination.current_page();
    html! {
        nav aria-label="pagination" {
            ul.pagination {
                @for control in pagination.controls() {
                    li.page-item.active[control.is_active(current_page)].disabled[control.disabled] {
                        @if control.disabled {
                            button.page-link type="button" aria-label=(aria_label(control.action)) disabled {
                                (label(control.action))
                            }
                        } @else {
                            a.page-link href=(page_href(control.target)) aria-label=(aria_label(control.action)) {
                                (label(control.action))
                            }
                        }
                    }
                }
            }
        }
    }
}
