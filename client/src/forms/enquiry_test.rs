#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use time::macros::datetime;

use super::*;
use crate::forms::validate::FieldError;
use crate::state::submission::ResponseKind;

fn filled() -> FormValues {
    FormValues::new()
        .with(NAME, "Jane Doe")
        .with(EMAIL, "jane@example.com")
        .with(PHONE, "0123456789")
        .with(ENQUIRY_TYPE, "product")
        .with(PRODUCT, "hoodie")
        .with(QUANTITY, "25")
        .with(MESSAGE, "Do you have the hoodie in XL?")
}

fn submitted_at() -> OffsetDateTime {
    datetime!(2024-05-03 12:05:09 UTC)
}

fn data_with(values: &FormValues) -> EnquiryData {
    EnquiryData::capture(values, submitted_at())
}

// =============================================================
// Validation
// =============================================================

#[test]
fn prepare_accepts_fully_valid_form() {
    let data = prepare(&filled(), submitted_at()).unwrap();
    assert_eq!(data.name, "Jane Doe");
    assert_eq!(data.enquiry_type, "product");
    assert_eq!(data.submitted_at, submitted_at());
}

#[test]
fn prepare_rejects_quantity_out_of_range() {
    let mut values = filled();
    values.set(QUANTITY, "1001");
    let errors = prepare(&values, submitted_at()).unwrap_err();
    assert_eq!(errors.get(QUANTITY), Some(&FieldError::QuantityOutOfRange { min: 1, max: 1000 }));
}

#[test]
fn prepare_accepts_quantity_boundaries() {
    for quantity in ["1", "1000"] {
        let mut values = filled();
        values.set(QUANTITY, quantity);
        assert!(prepare(&values, submitted_at()).is_ok(), "{quantity}");
    }
}

#[test]
fn prepare_requires_name_email_type_and_message() {
    let errors = prepare(&FormValues::new(), submitted_at()).unwrap_err();
    let failing: Vec<_> = errors.keys().copied().collect();
    assert_eq!(failing, vec![EMAIL, ENQUIRY_TYPE, MESSAGE, NAME]);
}

// =============================================================
// Lookups and slug
// =============================================================

#[test]
fn enquiry_type_label_falls_back_to_raw_code() {
    assert_eq!(enquiry_type_label("wholesale"), "Wholesale Opportunity");
    assert_eq!(enquiry_type_label("press"), "press");
}

#[test]
fn slugify_collapses_whitespace_and_lowercases() {
    assert_eq!(slugify("Jane Doe"), "jane-doe");
    assert_eq!(slugify("Mary  Ann\tSmith"), "mary-ann-smith");
}

#[test]
fn enquiry_kind_defaults_to_other() {
    assert_eq!(EnquiryKind::from_code("collaboration"), EnquiryKind::Collaboration);
    assert_eq!(EnquiryKind::from_code(""), EnquiryKind::Other);
}

// =============================================================
// Report
// =============================================================

#[test]
fn report_text_matches_fixed_template() {
    let report = data_with(&filled()).report_text().unwrap();
    let expected = "\
SAINTS LIFESTYLE APPAREL - ENQUIRY CONFIRMATION
================================================

ENQUIRY DETAILS:
----------------
Date & Time: 2024/05/03, 14:05:09
Enquiry Type: Product Information

CUSTOMER INFORMATION:
--------------------
Full Name: Jane Doe
Email: jane@example.com
Phone: 0123456789

PRODUCT INFORMATION:
-------------------
Product: Premium Hoodie
Quantity: 25

MESSAGE:
--------
Do you have the hoodie in XL?

ADDITIONAL INFORMATION:
----------------------
This enquiry was submitted through the Saints Lifestyle Apparel website.
Please keep this file for your records.

CONTACT INFORMATION:
-------------------
Email: info@saints.co.za
Phone: +27 676 484 634
Website: www.saints-lifestyle.co.za

Thank you for your interest in Saints Lifestyle Apparel!
We will respond to your enquiry within 24-48 hours.

================================================";
    assert_eq!(report, expected);
}

#[test]
fn report_text_uses_placeholders_for_missing_optional_fields() {
    let mut values = filled();
    values.set(PHONE, "");
    values.set(PRODUCT, "");
    values.set(QUANTITY, "");
    let report = data_with(&values).report_text().unwrap();
    assert!(report.contains("Phone: Not provided\n"));
    assert!(report.contains("Product: Not specified\n"));
    assert!(report.contains("Quantity: Not specified\n"));
}

#[test]
fn report_text_keeps_unknown_product_code() {
    let mut values = filled();
    values.set(PRODUCT, "socks");
    let report = data_with(&values).report_text().unwrap();
    assert!(report.contains("Product: socks\n"));
}

#[test]
fn file_name_embeds_slug_and_utc_timestamp() {
    let name = data_with(&filled()).file_name().unwrap();
    assert_eq!(name, "saints-enquiry-jane-doe-2024-05-03T12-05-09.txt");
}

// =============================================================
// Response text
// =============================================================

#[test]
fn product_response_mentions_product_when_given() {
    let text = data_with(&filled()).response_text();
    assert_eq!(
        text,
        "Thank you Jane Doe for your product enquiry. We'll provide you with detailed information about our hoodie shortly. Our team will contact you at jane@example.com within 24 hours.\n\nA confirmation file has been downloaded with your enquiry details."
    );
}

#[test]
fn product_response_skips_product_sentence_when_blank() {
    let mut values = filled();
    values.set(PRODUCT, "");
    let text = data_with(&values).response_text();
    assert!(text.starts_with(
        "Thank you Jane Doe for your product enquiry. Our team will contact you at jane@example.com within 24 hours."
    ));
}

#[test]
fn wholesale_response_mentions_quantity() {
    let mut values = filled();
    values.set(ENQUIRY_TYPE, "wholesale");
    let text = data_with(&values).response_text();
    assert!(text.starts_with(
        "Thank you Jane Doe for your wholesale enquiry. For quantities of 25 units, we offer discounted pricing. Our wholesale manager will contact you at jane@example.com to discuss pricing and terms."
    ));
}

#[test]
fn collaboration_response_uses_partnership_copy() {
    let mut values = filled();
    values.set(ENQUIRY_TYPE, "collaboration");
    let text = data_with(&values).response_text();
    assert!(text.contains("We're always excited to explore new partnerships."));
    assert!(text.ends_with("with your enquiry details."));
}

#[test]
fn other_response_promises_48_hours() {
    let mut values = filled();
    values.set(ENQUIRY_TYPE, "other");
    let text = data_with(&values).response_text();
    assert!(text.starts_with(
        "Thank you Jane Doe for your enquiry. We've received your message and will respond to jane@example.com within 48 hours."
    ));
}

// =============================================================
// Processing
// =============================================================

#[test]
fn process_saves_file_and_returns_receipt() {
    let mut saved = None;
    let receipt = block_on(process(data_with(&filled()), |file: &TextFile| {
        saved = Some(file.clone());
        Ok(())
    }))
    .unwrap();

    let saved = saved.expect("save called");
    assert_eq!(saved.mime, "text/plain");
    assert_eq!(saved.name, "saints-enquiry-jane-doe-2024-05-03T12-05-09.txt");
    assert!(saved.contents.starts_with("SAINTS LIFESTYLE APPAREL"));
    assert_eq!(receipt.file_name, saved.name);
    assert!(receipt.response.contains("Jane Doe"));
}

#[test]
fn process_surfaces_download_failure() {
    let result = block_on(process(data_with(&filled()), |_: &TextFile| {
        Err(DownloadError::Browser("blocked".to_owned()))
    }));
    assert!(matches!(result, Err(EnquiryError::Download(DownloadError::Browser(_)))));
}

#[test]
fn run_maps_success_to_thank_you_message() {
    let response = block_on(run(data_with(&filled()), |_: &TextFile| Ok(())));
    assert_eq!(response.kind, ResponseKind::Success);
    assert!(response.text.contains("Jane Doe"));
}

#[test]
fn run_maps_failure_to_generic_error_message() {
    let response = block_on(run(data_with(&filled()), |_: &TextFile| Err(DownloadError::Unavailable)));
    assert_eq!(response.kind, ResponseKind::Error);
    assert_eq!(response.text, FAILURE_TEXT);
}

#[test]
fn submission_state_uses_processing_label() {
    let mut state = submission_state();
    state.begin();
    assert_eq!(state.button_label(), "Processing...");
}

#[test]
fn report_text_keeps_message_verbatim() {
    let mut values = filled();
    values.set(MESSAGE, "Sizes {S, M}\nand colours?");
    let report = data_with(&values).report_text().unwrap();
    assert!(report.contains("MESSAGE:\n--------\nSizes {S, M}\nand colours?\n\nADDITIONAL INFORMATION:"));
}
