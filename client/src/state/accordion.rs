//! Single-open accordion panel group.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Which panel (by index) is expanded, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: Option<usize>,
}

impl AccordionState {
    /// Header click: collapse `index` if it is open, otherwise open it and
    /// collapse whichever panel was open before.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
