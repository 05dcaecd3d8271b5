//! View-model for the users page.

use std::ops::Range;

use crate::pagination::{PageAction, Pagination};
use crate::user::UserRecord;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 20;

/// The fetched users plus the page the viewer is on.
///
/// `current_page` is 1-indexed and owned here; it only changes through
/// [`UsersPage::set_current_page`] or [`UsersPage::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPage {
    users: Vec<UserRecord>,
    current_page: u32,
}

impl UsersPage {
    /// A fresh page always starts at page 1.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            current_page: 1,
        }
    }

    /// Build the page for a request that asked for `requested`, clamped to
    /// `[1, max(1, total_pages)]`.
    pub fn open_at(users: Vec<UserRecord>, requested: u32) -> Self {
        let mut page = Self::new(users);
        let last = page.total_pages().max(1);
        page.set_current_page(requested.clamp(1, last));
        page
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        u32::try_from(self.users.len().div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
    }

    /// Indices into [`UsersPage::users`] shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let page_index = (self.current_page as usize).saturating_sub(1);
        let start = page_index.saturating_mul(PAGE_SIZE).min(self.users.len());
        let end = start.saturating_add(PAGE_SIZE).min(self.users.len());
        start..end
    }

    pub fn visible(&self) -> &[UserRecord] {
        &self.users[self.visible_range()]
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.total_pages(), self.current_page)
    }

    /// Assign the current page directly.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    /// Activate a pagination control. Disabled controls are a no-op and
    /// return `false`.
    pub fn apply(&mut self, action: PageAction) -> bool {
        let control = self.pagination().control(action);
        if control.disabled {
            return false;
        }
        self.set_current_page(control.target);
        true
    }
}
