use crate::domain::Email;
use crate::error::VerifyError;
use crate::rules::verify::{verify_credentials, SUCCESS_MESSAGE};

/// Screen-side state for one verification form: the current input strings
/// and the outcome of the last submit. There is no pending state; `submit`
/// always completes and leaves exactly one result behind.
#[derive(Debug, Default)]
pub struct VerificationForm {
    email: String,
    password: String,
    outcome: Option<Result<Email, VerifyError>>,
}

impl VerificationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Clears the prior outcome and re-runs the whole sequence on the
    /// current inputs.
    pub fn submit(&mut self) -> &Result<Email, VerifyError> {
        self.outcome = None;
        self.outcome
            .insert(verify_credentials(&self.email, &self.password))
    }

    pub fn outcome(&self) -> Option<&Result<Email, VerifyError>> {
        self.outcome.as_ref()
    }

    /// The status line for the last submit, if any: the success message or
    /// the failure reason.
    pub fn message(&self) -> Option<String> {
        self.outcome.as_ref().map(|outcome| match outcome {
            Ok(_) => SUCCESS_MESSAGE.to_string(),
            Err(err) => err.to_string(),
        })
    }
}
