use crate::error::EmailError;

pub const REQUIRED_DOMAIN: &str = "gmail.com";
pub const MIN_LOCAL_PART_CHARS: usize = 3;

const REQUIRED_SUFFIX: &str = "@gmail.com";

/// Runs the rule chain over an already-normalized candidate. Rules are
/// checked in a fixed order and the first failure wins; later rules are
/// never evaluated.
pub fn ensure_valid_email(candidate: &str) -> Result<(), EmailError> {
    let local = local_part(candidate).ok_or(EmailError::InvalidFormat)?;

    if !candidate.ends_with(REQUIRED_SUFFIX) {
        return Err(EmailError::WrongDomain);
    }

    if local.chars().count() <= MIN_LOCAL_PART_CHARS {
        return Err(EmailError::LocalPartTooShort);
    }

    Ok(())
}

/// The substring before the first `@`, provided the candidate has a valid
/// shape: non-empty local part, a domain containing a dot, and no embedded
/// whitespace. A second `@` inside the domain is tolerated; the length rule
/// only ever measures against the first.
fn local_part(candidate: &str) -> Option<&str> {
    if candidate.contains(char::is_whitespace) {
        return None;
    }

    let (local, domain) = candidate.split_once('@')?;
    if local.is_empty() || !domain.contains('.') {
        return None;
    }

    Some(local)
}
