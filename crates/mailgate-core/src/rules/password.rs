use crate::error::VerifyError;

pub const MIN_PASSWORD_CHARS: usize = 4;
pub const EXPECTED_PASSWORD: &str = "12345";

/// Length gate first, then equality against the expected literal. The
/// candidate is compared as-is; passwords are never normalized.
pub fn check_password(candidate: &str) -> Result<(), VerifyError> {
    if candidate.chars().count() <= MIN_PASSWORD_CHARS {
        return Err(VerifyError::PasswordTooShort);
    }

    if candidate != EXPECTED_PASSWORD {
        return Err(VerifyError::PasswordMismatch);
    }

    Ok(())
}
