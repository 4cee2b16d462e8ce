//! Enquiry form flow with a downloadable confirmation file.
//!
//! SYSTEM CONTEXT
//! ==============
//! After validation the page starts [`process`]: it waits out the simulated
//! processing latency, renders the fixed-format confirmation report, hands it
//! to the injected `save` function (the browser download in production) and
//! returns the enquiry-type specific thank-you text. Any failure while
//! generating or saving the file collapses into one generic message; there
//! is no retry.

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use time::OffsetDateTime;

use super::validate::{FieldErrors, FieldFormat, FieldRule, validate_form};
use super::values::FormValues;
use crate::catalog::product_display_name;
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, ENQUIRY_LATENCY, WEBSITE};
use crate::state::submission::{ResponseMessage, SubmissionState};
use crate::util::clock;
use crate::util::download::{DownloadError, TextFile};
use crate::util::latency;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const ENQUIRY_TYPE: &str = "enquiryType";
pub const PRODUCT: &str = "product";
pub const QUANTITY: &str = "quantity";
pub const MESSAGE: &str = "message";

pub const RULES: &[FieldRule] = &[
    FieldRule::required(NAME),
    FieldRule::required(EMAIL).with_format(FieldFormat::Email),
    FieldRule::optional(PHONE).with_format(FieldFormat::Phone),
    FieldRule::required(ENQUIRY_TYPE),
    FieldRule::optional(PRODUCT),
    FieldRule::optional(QUANTITY).with_format(FieldFormat::Quantity { min: 1, max: 1000 }),
    FieldRule::required(MESSAGE),
];

/// Enquiry-type codes and their report labels.
pub const ENQUIRY_TYPES: &[(&str, &str)] = &[
    ("product", "Product Information"),
    ("wholesale", "Wholesale Opportunity"),
    ("collaboration", "Collaboration"),
    ("other", "Other Enquiry"),
];

/// Element id of the response region.
pub const RESPONSE_REGION_ID: &str = "responseMessage";

pub const FAILURE_TEXT: &str = "Sorry, there was an error processing your enquiry. Please try again.";

const DOWNLOAD_NOTE: &str = "\n\nA confirmation file has been downloaded with your enquiry details.";
const REPORT_RULE: &str = "================================================";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

pub fn submission_state() -> SubmissionState {
    SubmissionState::new("Submit Enquiry", "Processing...")
}

/// Thank-you branch selected by the enquiry type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnquiryKind {
    Product,
    Wholesale,
    Collaboration,
    Other,
}

impl EnquiryKind {
    /// Unknown codes fall into [`EnquiryKind::Other`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "product" => Self::Product,
            "wholesale" => Self::Wholesale,
            "collaboration" => Self::Collaboration,
            _ => Self::Other,
        }
    }
}

/// Report label for an enquiry-type code, falling back to the raw code.
pub fn enquiry_type_label(code: &str) -> &str {
    ENQUIRY_TYPES
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |(_, label)| *label)
}

/// Filename-safe form of a customer name: whitespace runs become `-`,
/// then everything is lowercased.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "-").to_lowercase()
}

/// Field values captured at submit time. Built fresh for every submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnquiryData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enquiry_type: String,
    pub product: String,
    pub quantity: String,
    pub message: String,
    pub submitted_at: OffsetDateTime,
}

impl EnquiryData {
    pub fn capture(values: &FormValues, submitted_at: OffsetDateTime) -> Self {
        Self {
            name: values.owned(NAME),
            email: values.owned(EMAIL),
            phone: values.owned(PHONE),
            enquiry_type: values.owned(ENQUIRY_TYPE),
            product: values.owned(PRODUCT),
            quantity: values.owned(QUANTITY),
            message: values.owned(MESSAGE),
            submitted_at,
        }
    }

    /// Plain-text confirmation report.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission time cannot be formatted.
    pub fn report_text(&self) -> Result<String, time::error::Format> {
        let timestamp = clock::display_timestamp(self.submitted_at)?;
        let phone = non_empty_or(&self.phone, "Not provided");
        let product = match product_display_name(&self.product) {
            Some(display) => display,
            None => non_empty_or(&self.product, "Not specified"),
        };
        let quantity = non_empty_or(&self.quantity, "Not specified");

        let enquiry_type = enquiry_type_label(&self.enquiry_type);
        let (name, email, message) = (&self.name, &self.email, &self.message);

        let report = format!(
            "\
SAINTS LIFESTYLE APPAREL - ENQUIRY CONFIRMATION
{REPORT_RULE}

ENQUIRY DETAILS:
----------------
Date & Time: {timestamp}
Enquiry Type: {enquiry_type}

CUSTOMER INFORMATION:
--------------------
Full Name: {name}
Email: {email}
Phone: {phone}

PRODUCT INFORMATION:
-------------------
Product: {product}
Quantity: {quantity}

MESSAGE:
--------
{message}

ADDITIONAL INFORMATION:
----------------------
This enquiry was submitted through the Saints Lifestyle Apparel website.
Please keep this file for your records.

CONTACT INFORMATION:
-------------------
Email: {CONTACT_EMAIL}
Phone: {CONTACT_PHONE}
Website: {WEBSITE}

Thank you for your interest in Saints Lifestyle Apparel!
We will respond to your enquiry within 24-48 hours.

{REPORT_RULE}"
        );
        Ok(report.trim().to_owned())
    }

    /// `saints-enquiry-{name-slug}-{utc-timestamp}.txt`
    ///
    /// # Errors
    ///
    /// Returns an error if the submission time cannot be formatted.
    pub fn file_name(&self) -> Result<String, time::error::Format> {
        let stamp = clock::file_timestamp(self.submitted_at)?;
        Ok(format!("saints-enquiry-{}-{stamp}.txt", slugify(&self.name)))
    }

    /// Confirmation report packaged for download.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission time cannot be formatted.
    pub fn to_file(&self) -> Result<TextFile, EnquiryError> {
        Ok(TextFile::plain(self.file_name()?, self.report_text()?))
    }

    /// Thank-you text for the response region.
    pub fn response_text(&self) -> String {
        let (name, email) = (&self.name, &self.email);
        let mut text = match EnquiryKind::from_code(&self.enquiry_type) {
            EnquiryKind::Product => {
                let mut text = format!("Thank you {name} for your product enquiry. ");
                if !self.product.is_empty() {
                    let _ = write!(
                        text,
                        "We'll provide you with detailed information about our {} shortly. ",
                        self.product
                    );
                }
                let _ = write!(text, "Our team will contact you at {email} within 24 hours.");
                text
            }
            EnquiryKind::Wholesale => {
                let mut text = format!("Thank you {name} for your wholesale enquiry. ");
                if !self.quantity.is_empty() {
                    let _ = write!(
                        text,
                        "For quantities of {} units, we offer discounted pricing. ",
                        self.quantity
                    );
                }
                let _ = write!(
                    text,
                    "Our wholesale manager will contact you at {email} to discuss pricing and terms."
                );
                text
            }
            EnquiryKind::Collaboration => format!(
                "Thank you {name} for your interest in collaboration. We're always excited to explore new partnerships. Our collaboration team will review your message and contact you at {email}."
            ),
            EnquiryKind::Other => format!(
                "Thank you {name} for your enquiry. We've received your message and will respond to {email} within 48 hours."
            ),
        };
        text.push_str(DOWNLOAD_NOTE);
        text
    }
}

fn non_empty_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Failure while generating or saving the confirmation file.
#[derive(Debug, thiserror::Error)]
pub enum EnquiryError {
    #[error("could not format enquiry timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Successful enquiry: the saved file name and the thank-you text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnquiryReceipt {
    pub file_name: String,
    pub response: String,
}

/// Validate the whole form and capture it with `submitted_at`.
///
/// # Errors
///
/// Returns every failing field; nothing is processed.
pub fn prepare(values: &FormValues, submitted_at: OffsetDateTime) -> Result<EnquiryData, FieldErrors> {
    validate_form(RULES, values)?;
    Ok(EnquiryData::capture(values, submitted_at))
}

/// Wait out the processing latency, generate the report and `save` it.
///
/// # Errors
///
/// Returns an error if the report cannot be generated or `save` fails.
pub async fn process<S>(data: EnquiryData, save: S) -> Result<EnquiryReceipt, EnquiryError>
where
    S: FnOnce(&TextFile) -> Result<(), DownloadError>,
{
    latency::simulate(ENQUIRY_LATENCY).await;
    let file = data.to_file()?;
    save(&file)?;
    Ok(EnquiryReceipt { file_name: file.name, response: data.response_text() })
}

/// Run [`process`] and turn its outcome into the response-region message.
pub async fn run<S>(data: EnquiryData, save: S) -> ResponseMessage
where
    S: FnOnce(&TextFile) -> Result<(), DownloadError>,
{
    match process(data, save).await {
        Ok(receipt) => {
            leptos::logging::log!("enquiry confirmation saved as {}", receipt.file_name);
            ResponseMessage::success(receipt.response)
        }
        Err(err) => {
            leptos::logging::error!("error processing enquiry: {err}");
            ResponseMessage::error(FAILURE_TEXT)
        }
    }
}
