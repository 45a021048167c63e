use crate::error::EmailError;
use crate::rules::email::ensure_valid_email;
use serde::{Deserialize, Serialize};
use std::fmt;

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A normalized, rule-valid address. Construction is the only way in, so any
/// `Email` value has already passed the full rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let normalized = normalize_email(raw);
        ensure_valid_email(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
