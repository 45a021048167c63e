pub mod domain;
pub mod error;
pub mod form;
pub mod rules;

pub use domain::{normalize_email, Email};
pub use error::{EmailError, VerifyError};
pub use form::VerificationForm;
pub use rules::{
    check_password, ensure_valid_email, verify_credentials, EXPECTED_PASSWORD,
    MIN_LOCAL_PART_CHARS, MIN_PASSWORD_CHARS, REQUIRED_DOMAIN, SUCCESS_MESSAGE,
};
