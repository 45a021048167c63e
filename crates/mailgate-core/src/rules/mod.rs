pub mod email;
pub mod password;
pub mod verify;

pub use email::{ensure_valid_email, MIN_LOCAL_PART_CHARS, REQUIRED_DOMAIN};
pub use password::{check_password, EXPECTED_PASSWORD, MIN_PASSWORD_CHARS};
pub use verify::{verify_credentials, SUCCESS_MESSAGE};
