//! Validated email addresses
//!
//! The validity rule is structural: exactly one `@`, a non-empty prefix and
//! domain, separator characters only between alphanumeric runs, and a
//! letters-only top-level label of at least 2 characters.

use crate::{PocketBankError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check whether a string is a structurally valid email address
///
/// The prefix (before `@`) allows `.`, `_`, and `-` as separators; the
/// domain allows `.` and `-`. A separator must sit between alphanumeric
/// runs, so none may lead, trail, or repeat. The domain must end in a dot
/// followed by at least 2 letters: `user@a.bc` is valid, `user@a.b` is not.
pub fn is_email_valid(email: &str) -> bool {
    let (prefix, domain) = match split_exactly_one_at(email) {
        Some(parts) => parts,
        None => return false,
    };
    if prefix.is_empty() || domain.is_empty() {
        return false;
    }

    let prefix_re = Regex::new(r"^[A-Za-z0-9]+([._-][A-Za-z0-9]+)*$").unwrap();
    let domain_re = Regex::new(r"^[A-Za-z0-9]+([.-][A-Za-z0-9]+)*\.[A-Za-z]{2,}$").unwrap();

    prefix_re.is_match(prefix) && domain_re.is_match(domain)
}

/// Split on `@`, rejecting strings with zero or multiple occurrences
fn split_exactly_one_at(email: &str) -> Option<(&str, &str)> {
    let mut parts = email.split('@');
    let prefix = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((prefix, domain))
}

/// A validated email address
///
/// Construction goes through [`EmailAddress::parse`], so a held value always
/// satisfies the validity rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an email address
    pub fn parse(email: &str) -> Result<Self> {
        if is_email_valid(email) {
            Ok(Self(email.to_string()))
        } else {
            Err(PocketBankError::invalid_email(email))
        }
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
