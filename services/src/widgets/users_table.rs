use maud::{Markup, html};
use roster_business::UserRecord;

/// Column headers, in display order.
pub const COLUMNS: [&str; 6] = ["ID", "Имя", "Фамилия", "Телефон", "Email", "Дата обновления"];

/// Table of `users`; always has a header row, even when empty.
pub fn users_table(users: &[UserRecord]) -> Markup {
    html! {
        table.table.table-striped.table-bordered.table-hover {
            thead {
                tr {
                    @for column in COLUMNS {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for user in users {
                    tr {
                        td { (user.id) }
                        td { (user.firstname) }
                        td { (user.lastname) }
                        td { (user.phone) }
                        td { (user.email) }
                        td { (user.updated_at) }
                    }
                }
            }
        }
    }
}
