#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// JSON body POSTed to the form-relay endpoint.
///
/// Fields are trimmed but otherwise unvalidated; the relay service is the
/// authority on what it accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// Build a payload from raw field values, trimming whitespace.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }
}

/// Submission lifecycle for the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

/// State for the contact form. The submit control's label and disabled
/// attribute derive from `phase`, so restoring them after a submission is
/// just returning to `Idle`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContactState {
    pub phase: SubmitPhase,
}

impl ContactState {
    /// Enter `Sending`. Returns false if a submission is already in
    /// flight, which is the double-submit guard: callers must bail
    /// without issuing a second request.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Sending;
        true
    }

    /// Return to `Idle` regardless of outcome.
    pub fn finish(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    pub fn is_sending(self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    /// Label for the submit control.
    pub fn submit_label(self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
        }
    }
}
