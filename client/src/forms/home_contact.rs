//! Home page quick-contact form: a presence check and a blocking alert.

#[cfg(test)]
#[path = "home_contact_test.rs"]
mod home_contact_test;

use super::values::FormValues;

pub const NAME: &str = "homeName";
pub const EMAIL: &str = "homeEmail";
pub const MESSAGE: &str = "homeMessage";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeContactVerdict {
    Accepted,
    Incomplete,
}

impl HomeContactVerdict {
    pub fn alert_text(self) -> &'static str {
        match self {
            Self::Accepted => "Thank you for your message! We will get back to you soon.",
            Self::Incomplete => "Please fill in all required fields.",
        }
    }

    /// Only an accepted message clears the form.
    pub fn resets_form(self) -> bool {
        self == Self::Accepted
    }
}

/// Accept when name, email and message are all present. Values are not
/// trimmed, so whitespace counts as present.
pub fn check(values: &FormValues) -> HomeContactVerdict {
    if [NAME, EMAIL, MESSAGE].iter().all(|id| !values.get(id).is_empty()) {
        HomeContactVerdict::Accepted
    } else {
        HomeContactVerdict::Incomplete
    }
}
