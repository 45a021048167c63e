pub mod email;

pub use email::{normalize_email, Email};
