//! Navigation chrome state: the mobile menu and in-page anchor scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site layout provides one `RwSignal<NavState>`; the menu toggle flips
//! it and a successful anchor scroll closes it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Mobile navigation menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Element id targeted by an in-page link, or `None` for a bare `#` or a
/// link that does not start with `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Document scroll position that puts a target just below the fixed header.
///
/// `target_top` is the target's viewport-relative top edge.
pub fn scroll_top(target_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_top + page_offset - header_height
}
