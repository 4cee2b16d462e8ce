//! Submit-button and response-region state shared by the async form flows.
//!
//! DESIGN
//! ======
//! A flow is `Idle` until validation passes, then `Submitting` until its
//! task resolves. [`SubmissionState::begin`] refuses to start while a task is
//! pending, which is what keeps a double submit from starting a second
//! latency/response cycle.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    Error,
}

/// Message rendered in a form's response region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMessage {
    pub kind: ResponseKind,
    pub text: String,
}

impl ResponseMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ResponseKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ResponseKind::Error, text: text.into() }
    }

    /// CSS classes for the response region.
    pub fn class(&self) -> &'static str {
        match self.kind {
            ResponseKind::Success => "response-message success",
            ResponseKind::Error => "response-message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionState {
    pub phase: SubmitPhase,
    pub idle_label: &'static str,
    pub busy_label: &'static str,
    pub response: Option<ResponseMessage>,
}

impl SubmissionState {
    pub fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self { phase: SubmitPhase::Idle, idle_label, busy_label, response: None }
    }

    /// Enter `Submitting`. Returns `false` (and changes nothing) if a
    /// submission is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Leave `Submitting` and show `response`.
    pub fn finish(&mut self, response: ResponseMessage) {
        self.phase = SubmitPhase::Idle;
        self.response = Some(response);
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() { self.busy_label } else { self.idle_label }
    }
}
