//! Shared field validation driven by a declarative rule table.
//!
//! DESIGN
//! ======
//! Every form declares a `&[FieldRule]` table. A rule names the element id,
//! whether the field is required, and an optional format check. Checks run
//! in order and the first failure wins: blank-required first, then the
//! format check on the trimmed value, then (for a full-form pass only) an
//! email/phone re-check on the raw value.
//!
//! The phone pattern and the quantity coercion are intentionally loose. The
//! phone check accepts any run of ten or more digits, spaces, hyphens or
//! parentheses; the quantity check lets through values that do not parse as
//! a number.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::values::FormValues;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern compiles"));

/// Format check applied to a non-empty value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Phone,
    /// Inclusive numeric range.
    Quantity { min: u32, max: u32 },
}

/// One row of a form's rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub id: &'static str,
    pub required: bool,
    pub format: Option<FieldFormat>,
}

impl FieldRule {
    pub const fn required(id: &'static str) -> Self {
        Self { id, required: true, format: None }
    }

    pub const fn optional(id: &'static str) -> Self {
        Self { id, required: false, format: None }
    }

    #[must_use]
    pub const fn with_format(self, format: FieldFormat) -> Self {
        Self { format: Some(format), ..self }
    }
}

/// A field-level validation failure. `Display` is the inline message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a quantity between {min} and {max}")]
    QuantityOutOfRange { min: u32, max: u32 },
}

/// Failures keyed by field id.
pub type FieldErrors = BTreeMap<&'static str, FieldError>;

/// Element id of the error slot paired with `field_id`.
pub fn error_slot_id(field_id: &str) -> String {
    format!("{field_id}Error")
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Validate one field the way a blur event does.
///
/// # Errors
///
/// Returns the first rule the trimmed value breaks.
pub fn validate_field(rule: &FieldRule, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return if rule.required { Err(FieldError::Required) } else { Ok(()) };
    }
    match rule.format {
        Some(FieldFormat::Email) if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        Some(FieldFormat::Phone) if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        Some(FieldFormat::Quantity { min, max }) => {
            let quantity = coerce_number(value);
            if quantity < f64::from(min) || quantity > f64::from(max) {
                Err(FieldError::QuantityOutOfRange { min, max })
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Validate every required or formatted field of a form.
///
/// # Errors
///
/// Returns all failing fields; submission must not proceed.
pub fn validate_form(rules: &[FieldRule], values: &FormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for rule in rules.iter().filter(|r| r.required || r.format.is_some()) {
        let raw = values.get(rule.id);
        if let Err(err) = validate_field(rule, raw).and_then(|()| recheck_raw(rule, raw)) {
            errors.insert(rule.id, err);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Look up the rule for `id` in a form's table.
pub fn rule_for<'a>(rules: &'a [FieldRule], id: &str) -> Option<&'a FieldRule> {
    rules.iter().find(|r| r.id == id)
}

// Email and phone are checked again against the untrimmed input.
fn recheck_raw(rule: &FieldRule, raw: &str) -> Result<(), FieldError> {
    if raw.is_empty() {
        return Ok(());
    }
    match rule.format {
        Some(FieldFormat::Email) if !is_valid_email(raw) => Err(FieldError::InvalidEmail),
        Some(FieldFormat::Phone) if !is_valid_phone(raw) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Loose numeric coercion: anything unparseable becomes NaN, which fails
/// both range comparisons and so passes the check.
fn coerce_number(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}
