//! Subscription form state machine.
//!
//! The form holds the raw email text and whether a submit has been
//! attempted. The "invalid" indicator is never stored: it is computed from
//! those two fields every time it is read, so editing the text after a
//! failed submit keeps the indicator in sync without a separate flag.

use crate::error::ValidationError;

/// Visible state of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormState {
    /// Nothing to report (initial, or after a successful submit)
    #[default]
    Idle,
    /// A submit was attempted while the field was empty
    Invalid,
}

/// Result of a submit action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field was non-empty; carries the text that was submitted
    Accepted { email: String },
    /// Field was empty; the text is left untouched
    Rejected(ValidationError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// The email subscription form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    email: String,
    submit_attempted: bool,
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field text
    pub fn email(&self) -> &str {
        &self.email
    }

    /// True once a submit has been attempted and not yet accepted
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Store the typed value exactly as given.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Attempt to submit the form.
    ///
    /// Any non-empty text is accepted, including whitespace. On accept the
    /// field is cleared and the attempted flag is reset, so the invalid
    /// indicator can never show next to a just-cleared field.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_attempted = true;

        if self.email.is_empty() {
            return SubmitOutcome::Rejected(ValidationError::EmailRequired);
        }

        let email = std::mem::take(&mut self.email);
        self.submit_attempted = false;
        SubmitOutcome::Accepted { email }
    }

    pub fn is_invalid(&self) -> bool {
        self.submit_attempted && self.email.is_empty()
    }

    /// Inline helper text shown under the field
    pub fn helper_text(&self) -> Option<String> {
        self.validation_error().map(|e| e.to_string())
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.is_invalid().then_some(ValidationError::EmailRequired)
    }

    pub fn state(&self) -> FormState {
        if self.is_invalid() {
            FormState::Invalid
        } else {
            FormState::Idle
        }
    }
}
