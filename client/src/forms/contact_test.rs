#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;
use crate::forms::validate::FieldError;
use crate::state::submission::ResponseKind;

fn filled() -> FormValues {
    FormValues::new()
        .with(NAME, "Jane Doe")
        .with(EMAIL, "jane@example.com")
        .with(PHONE, "+27 676 484 634")
        .with(MESSAGE_TYPE, "General Enquiry")
        .with(MESSAGE, "Do you ship to Durban?")
}

#[test]
fn prepare_captures_all_fields() {
    let submission = prepare(&filled()).unwrap();
    assert_eq!(submission.name, "Jane Doe");
    assert_eq!(submission.email, "jane@example.com");
    assert_eq!(submission.phone, "+27 676 484 634");
    assert_eq!(submission.message_type, "General Enquiry");
    assert_eq!(submission.message, "Do you ship to Durban?");
}

#[test]
fn prepare_blocks_on_blank_required_fields() {
    let errors = prepare(&FormValues::new()).unwrap_err();
    for id in [NAME, EMAIL, MESSAGE_TYPE, MESSAGE] {
        assert_eq!(errors.get(id), Some(&FieldError::Required), "{id}");
    }
    assert!(!errors.contains_key(PHONE));
}

#[test]
fn prepare_rejects_short_phone_even_though_optional() {
    let mut values = filled();
    values.set(PHONE, "12345");
    let errors = prepare(&values).unwrap_err();
    assert_eq!(errors.get(PHONE), Some(&FieldError::InvalidPhone));
}

#[test]
fn response_text_lowercases_message_type() {
    let submission = prepare(&filled()).unwrap();
    assert_eq!(
        submission.response_text(),
        "Thank you Jane Doe for your message. We've received your general enquiry and will respond to you at jane@example.com within 24 hours."
    );
}

#[test]
fn submit_resolves_to_success_message() {
    let submission = prepare(&filled()).unwrap();
    let expected = submission.response_text();
    let response = block_on(submit(submission));
    assert_eq!(response.kind, ResponseKind::Success);
    assert_eq!(response.text, expected);
}

#[test]
fn submission_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(prepare(&filled()).unwrap()).unwrap();
    assert_eq!(json["messageType"], "General Enquiry");
    assert_eq!(json["name"], "Jane Doe");
}

#[test]
fn submission_state_uses_sending_label() {
    let mut state = submission_state();
    assert_eq!(state.button_label(), "Send Message");
    state.begin();
    assert_eq!(state.button_label(), "Sending...");
}
