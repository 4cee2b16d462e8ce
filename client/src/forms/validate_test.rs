use super::*;

const RULES: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::required("email").with_format(FieldFormat::Email),
    FieldRule::optional("phone").with_format(FieldFormat::Phone),
    FieldRule::optional("quantity").with_format(FieldFormat::Quantity { min: 1, max: 1000 }),
    FieldRule::optional("notes"),
];

fn rule(id: &str) -> &'static FieldRule {
    rule_for(RULES, id).expect("rule exists")
}

fn valid_values() -> FormValues {
    FormValues::new()
        .with("name", "Jane Doe")
        .with("email", "jane@example.com")
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn blank_required_field_reports_required() {
    assert_eq!(validate_field(rule("name"), ""), Err(FieldError::Required));
    assert_eq!(validate_field(rule("name"), "   "), Err(FieldError::Required));
    assert_eq!(FieldError::Required.to_string(), "This field is required");
}

#[test]
fn blank_optional_field_passes() {
    assert_eq!(validate_field(rule("phone"), ""), Ok(()));
    assert_eq!(validate_field(rule("notes"), ""), Ok(()));
}

#[test]
fn blank_required_email_reports_required_not_format() {
    let errors = validate_form(RULES, &FormValues::new().with("name", "Jane")).unwrap_err();
    assert_eq!(errors.get("email"), Some(&FieldError::Required));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
    assert_eq!(validate_field(rule("email"), "a@b.co"), Ok(()));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["a@b", "a.com", "@b.com"] {
        assert_eq!(validate_field(rule("email"), bad), Err(FieldError::InvalidEmail), "{bad}");
    }
    assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email address");
}

#[test]
fn full_form_rechecks_email_against_raw_value() {
    let values = valid_values().with("email", " a@b.co ");
    // Trimmed value passes on blur, but the raw value carries whitespace.
    assert_eq!(validate_field(rule("email"), " a@b.co "), Ok(()));
    let errors = validate_form(RULES, &values).unwrap_err();
    assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmail));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_accepts_loose_formats() {
    assert_eq!(validate_field(rule("phone"), "+27 676 484 634"), Ok(()));
    assert_eq!(validate_field(rule("phone"), "0123456789"), Ok(()));
    assert_eq!(validate_field(rule("phone"), "(012) 345-6789"), Ok(()));
}

#[test]
fn phone_rejects_short_numbers() {
    assert_eq!(validate_field(rule("phone"), "12345"), Err(FieldError::InvalidPhone));
    assert_eq!(FieldError::InvalidPhone.to_string(), "Please enter a valid phone number");
}

#[test]
fn phone_rejects_letters() {
    assert!(!is_valid_phone("012345678x"));
}

#[test]
fn optional_phone_is_still_checked_on_submit() {
    let errors = validate_form(RULES, &valid_values().with("phone", "12345")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("phone"), Some(&FieldError::InvalidPhone));
}

// =============================================================
// Quantity
// =============================================================

#[test]
fn quantity_bounds_are_inclusive() {
    assert_eq!(validate_field(rule("quantity"), "1"), Ok(()));
    assert_eq!(validate_field(rule("quantity"), "1000"), Ok(()));
}

#[test]
fn quantity_outside_range_is_rejected() {
    let expected = Err(FieldError::QuantityOutOfRange { min: 1, max: 1000 });
    assert_eq!(validate_field(rule("quantity"), "0"), expected);
    assert_eq!(validate_field(rule("quantity"), "1001"), expected);
    assert_eq!(validate_field(rule("quantity"), "-5"), expected);
    assert_eq!(
        FieldError::QuantityOutOfRange { min: 1, max: 1000 }.to_string(),
        "Please enter a quantity between 1 and 1000"
    );
}

#[test]
fn quantity_that_is_not_a_number_passes() {
    assert_eq!(validate_field(rule("quantity"), "lots"), Ok(()));
}

// =============================================================
// Whole form
// =============================================================

#[test]
fn valid_form_passes() {
    let values = valid_values().with("phone", "0123456789").with("quantity", "10");
    assert_eq!(validate_form(RULES, &values), Ok(()));
}

#[test]
fn every_failing_field_is_reported() {
    let values = FormValues::new().with("email", "a@b").with("quantity", "5000");
    let errors = validate_form(RULES, &values).unwrap_err();
    assert_eq!(errors.get("name"), Some(&FieldError::Required));
    assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmail));
    assert_eq!(errors.get("quantity"), Some(&FieldError::QuantityOutOfRange { min: 1, max: 1000 }));
    assert!(!errors.contains_key("notes"));
}

#[test]
fn error_slot_id_appends_suffix() {
    assert_eq!(error_slot_id("contactEmail"), "contactEmailError");
}
