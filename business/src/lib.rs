//! Business layer for the roster page.
//!
//! Everything here is independent of how the page is rendered:
//! - [`UserRecord`]: the record shape served by the users endpoint
//! - [`loader`]: one GET per request, folded into a [`LoadResult`]
//! - [`pagination`]: the page-number window and its navigation controls
//! - [`page`]: the [`UsersPage`] view-model that owns `current_page`

pub mod http;
pub mod loader;
pub mod page;
pub mod pagination;
mod user;

pub use loader::{DEFAULT_USERS_URL, HttpUserSource, LoadResult, UserSource, load_users};
pub use page::{PAGE_SIZE, UsersPage};
pub use pagination::{NavControl, PageAction, Pagination, WINDOW_SIZE};
pub use user::UserRecord;
