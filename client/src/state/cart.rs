//! Cart counter and add-to-cart button feedback.
//!
//! The counter is shared by every add-to-cart button on a page; each button
//! owns its own [`AddButtonFeedback`] so one button's "Added!" flash does not
//! touch the others.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

pub const ADD_LABEL: &str = "Add to Cart";
pub const ADDED_LABEL: &str = "Added!";
pub const ADDED_BACKGROUND: &str = "#32ad3a";

/// Number of items added during this page visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub count: u32,
}

impl CartState {
    pub fn add_item(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

/// Transient visual state of one add-to-cart button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddButtonFeedback {
    pub showing_added: bool,
    /// Bumped on every click so only the latest revert timer clears the flash.
    pub seq: u64,
}

impl AddButtonFeedback {
    /// Start the flash; returns the sequence number the revert must match.
    pub fn flash(&mut self) -> u64 {
        self.showing_added = true;
        self.seq += 1;
        self.seq
    }

    /// Revert the flash if no newer click happened since `seq`.
    pub fn revert(&mut self, seq: u64) {
        if self.seq == seq {
            self.showing_added = false;
        }
    }

    pub fn label(&self) -> &'static str {
        if self.showing_added { ADDED_LABEL } else { ADD_LABEL }
    }

    pub fn background(&self) -> Option<&'static str> {
        self.showing_added.then_some(ADDED_BACKGROUND)
    }
}
