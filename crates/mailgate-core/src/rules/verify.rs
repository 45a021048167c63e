use crate::domain::Email;
use crate::error::VerifyError;
use crate::rules::password::check_password;

pub const SUCCESS_MESSAGE: &str = "verification successful, welcome!";

/// The full submit sequence: email rule chain, then password checks. The
/// first failure is returned and nothing after it is evaluated. Pure; every
/// call recomputes from scratch.
pub fn verify_credentials(email: &str, password: &str) -> Result<Email, VerifyError> {
    let email = Email::new(email)?;
    check_password(password)?;
    Ok(email)
}
