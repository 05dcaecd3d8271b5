//! Page-number window and navigation controls.
//!
//! [`Pagination`] is a pure function of `(total_pages, current_page)`. It
//! never changes state itself; the owner applies a control's target when the
//! control is enabled (see [`crate::UsersPage::apply`]).
//!
//! `First` and `Last` jump straight to page 1 and the last page rather than
//! moving by one window.

use std::ops::RangeInclusive;

/// Number of page buttons shown at once.
pub const WINDOW_SIZE: u32 = 10;

/// Something the user can activate in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Goto(u32),
    Next,
    Last,
}

/// A resolved control: where it leads and whether it can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub action: PageAction,
    pub target: u32,
    pub disabled: bool,
}

impl NavControl {
    /// Whether this is the page-number button for the current page.
    pub fn is_active(&self, current_page: u32) -> bool {
        matches!(self.action, PageAction::Goto(page) if page == current_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_pages: u32,
    current_page: u32,
}

impl Pagination {
    pub fn new(total_pages: u32, current_page: u32) -> Self {
        Self {
            total_pages,
            current_page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Inclusive range of page numbers to show, empty when there are no pages.
    pub fn window(&self) -> RangeInclusive<u32> {
        let midpoint = WINDOW_SIZE.div_ceil(2);
        let start = self
            .current_page
            .saturating_add(1)
            .saturating_sub(midpoint)
            .max(1);
        let end = start
            .saturating_add(WINDOW_SIZE - 1)
            .min(self.total_pages);
        // Shift left so a short tail still fills the window.
        let start = end.saturating_add(1).saturating_sub(WINDOW_SIZE).max(1);
        start..=end
    }

    /// Resolve `action` against the current position.
    pub fn control(&self, action: PageAction) -> NavControl {
        let current = self.current_page;
        let (target, disabled) = match action {
            PageAction::First => (1, current <= 1),
            PageAction::Previous => (current.saturating_sub(1).max(1), current <= 1),
            PageAction::Goto(page) => (page, !self.window().contains(&page)),
            PageAction::Next => (current.saturating_add(1), current >= self.total_pages),
            PageAction::Last => (
                self.total_pages,
                current.saturating_add(WINDOW_SIZE) > self.total_pages,
            ),
        };

        NavControl {
            action,
            target,
            disabled,
        }
    }

    /// All controls in display order: first, previous, page numbers, next, last.
    pub fn controls(&self) -> Vec<NavControl> {
        let mut controls = Vec::with_capacity(WINDOW_SIZE as usize + 4);
        controls.push(self.control(PageAction::First));
        controls.push(self.control(PageAction::Previous));
        controls.extend(self.window().map(|page| self.control(PageAction::Goto(page))));
        controls.push(self.control(PageAction::Next));
        controls.push(self.control(PageAction::Last));
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(total_pages: u32, current_page: u32) -> Vec<u32> {
        Pagination::new(total_pages, current_page).window().collect()
    }

    #[test]
    fn test_window_has_expected_length_and_contains_current() {
        for total_pages in 0..=40 {
            for current_page in 1..=total_pages.max(1) {
                let pages = window(total_pages, current_page);
                assert_eq!(
                    pages.len(),
                    total_pages.min(WINDOW_SIZE) as usize,
                    "total={total_pages} current={current_page}"
                );
                if total_pages >= 1 {
                    assert!(
                        pages.contains(&current_page),
                        "total={total_pages} current={current_page}"
                    );
                }
                assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn test_window_is_empty_without_pages() {
        assert!(window(0, 1).is_empty());
    }

    #[test]
    fn test_window_short_list() {
        assert_eq!(window(3, 1), vec![1, 2, 3]);
        assert_eq!(window(3, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_centres_on_current_page() {
        assert_eq!(window(100, 50), (46..=55).collect::<Vec<_>>());
        assert_eq!(window(100, 6), (2..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_sticks_to_the_edges() {
        assert_eq!(window(100, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(window(100, 5), (1..=10).collect::<Vec<_>>());
        assert_eq!(window(100, 100), (91..=100).collect::<Vec<_>>());
        assert_eq!(window(100, 97), (91..=100).collect::<Vec<_>>());
    }

    #[test]
    fn test_previous_and_first_disabled_on_first_page() {
        let pagination = Pagination::new(5, 1);
        assert!(pagination.control(PageAction::Previous).disabled);
        assert!(pagination.control(PageAction::First).disabled);
        assert!(!pagination.control(PageAction::Next).disabled);
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let pagination = Pagination::new(5, 5);
        assert!(pagination.control(PageAction::Next).disabled);
        let previous = pagination.control(PageAction::Previous);
        assert!(!previous.disabled);
        assert_eq!(previous.target, 4);
    }

    #[test]
    fn test_first_and_last_jump_to_the_extremes() {
        let pagination = Pagination::new(40, 12);
        assert_eq!(pagination.control(PageAction::First).target, 1);
        let last = pagination.control(PageAction::Last);
        assert_eq!(last.target, 40);
        assert!(!last.disabled);
    }

    #[test]
    fn test_last_disabled_within_a_window_of_the_end() {
        assert!(Pagination::new(40, 31).control(PageAction::Last).disabled);
        assert!(!Pagination::new(40, 30).control(PageAction::Last).disabled);
        assert!(Pagination::new(3, 1).control(PageAction::Last).disabled);
    }

    #[test]
    fn test_goto_outside_window_is_disabled() {
        let pagination = Pagination::new(100, 50);
        assert!(!pagination.control(PageAction::Goto(46)).disabled);
        assert!(pagination.control(PageAction::Goto(45)).disabled);
        assert!(pagination.control(PageAction::Goto(0)).disabled);
    }

    #[test]
    fn test_controls_order_and_active_page() {
        let pagination = Pagination::new(3, 2);
        let controls = pagination.controls();
        let actions: Vec<_> = controls.iter().map(|c| c.action).collect();
        assert_eq!(
            actions,
            vec![
                PageAction::First,
                PageAction::Previous,
                PageAction::Goto(1),
                PageAction::Goto(2),
                PageAction::Goto(3),
                PageAction::Next,
                PageAction::Last,
            ]
        );
        let active: Vec<_> = controls.iter().filter(|c| c.is_active(2)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].target, 2);
    }

    #[test]
    fn test_no_pages_only_has_disabled_navigation() {
        let controls = Pagination::new(0, 1).controls();
        assert_eq!(controls.len(), 4);
        assert!(controls.iter().all(|c| c.disabled));
    }
}
