//! Contact form flow: validate, simulate sending, then thank the visitor.
//!
//! No network call happens. After the simulated latency the captured data is
//! written to the diagnostic log and a synthesized thank-you message is
//! returned for the response region.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use super::validate::{FieldErrors, FieldFormat, FieldRule, validate_form};
use super::values::FormValues;
use crate::content::CONTACT_LATENCY;
use crate::state::submission::{ResponseMessage, SubmissionState};
use crate::util::latency;

pub const NAME: &str = "contactName";
pub const EMAIL: &str = "contactEmail";
pub const PHONE: &str = "contactPhone";
pub const MESSAGE_TYPE: &str = "messageType";
pub const MESSAGE: &str = "contactMessage";

pub const RULES: &[FieldRule] = &[
    FieldRule::required(NAME),
    FieldRule::required(EMAIL).with_format(FieldFormat::Email),
    FieldRule::optional(PHONE).with_format(FieldFormat::Phone),
    FieldRule::required(MESSAGE_TYPE),
    FieldRule::required(MESSAGE),
];

/// `(value, label)` options of the message-type select. The value is echoed,
/// lowercased, in the thank-you text.
pub const MESSAGE_TYPES: &[(&str, &str)] = &[
    ("General Enquiry", "General Enquiry"),
    ("Order Support", "Order Support"),
    ("Feedback", "Feedback"),
    ("Partnership", "Partnership"),
];

/// Element id of the response region.
pub const RESPONSE_REGION_ID: &str = "contactResponse";

pub fn submission_state() -> SubmissionState {
    SubmissionState::new("Send Message", "Sending...")
}

/// Field values captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message_type: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn capture(values: &FormValues) -> Self {
        Self {
            name: values.owned(NAME),
            email: values.owned(EMAIL),
            phone: values.owned(PHONE),
            message_type: values.owned(MESSAGE_TYPE),
            message: values.owned(MESSAGE),
        }
    }

    pub fn response_text(&self) -> String {
        format!(
            "Thank you {} for your message. We've received your {} and will respond to you at {} within 24 hours.",
            self.name,
            self.message_type.to_lowercase(),
            self.email
        )
    }
}

/// Validate the whole form and capture it for sending.
///
/// # Errors
///
/// Returns every failing field; nothing is submitted.
pub fn prepare(values: &FormValues) -> Result<ContactSubmission, FieldErrors> {
    validate_form(RULES, values)?;
    Ok(ContactSubmission::capture(values))
}

/// Simulate sending `submission` and produce the success message.
pub async fn submit(submission: ContactSubmission) -> ResponseMessage {
    latency::simulate(CONTACT_LATENCY).await;
    match serde_json::to_string(&submission) {
        Ok(json) => leptos::logging::log!("contact form data to be sent via email: {json}"),
        Err(err) => leptos::logging::warn!("contact form data could not be serialized: {err}"),
    }
    ResponseMessage::success(submission.response_text())
}
