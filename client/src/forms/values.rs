//! Current string values of a form's fields, keyed by element id.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use std::collections::BTreeMap;

/// Field id -> current input value. Missing fields read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `id`, or `""` if the field was never touched.
    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map_or("", String::as_str)
    }

    pub fn set(&mut self, id: &'static str, value: impl Into<String>) {
        self.0.insert(id, value.into());
    }

    /// Builder form of [`FormValues::set`].
    #[must_use]
    pub fn with(mut self, id: &'static str, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    /// Owned copy of the value of `id`.
    pub fn owned(&self, id: &str) -> String {
        self.get(id).to_owned()
    }

    /// Reset every field to empty, like `HTMLFormElement.reset()`.
    pub fn reset(&mut self) {
        self.0.clear();
    }
}
