//! Reusable pieces of markup.

pub mod alert;
pub mod pagination;
pub mod users_table;
