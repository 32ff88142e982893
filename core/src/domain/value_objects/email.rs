//! Email value object.

use std::fmt;

use taskly_shared::utils::validation::validators;

use crate::errors::{DomainError, DomainResult};

/// A validated email address, stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if !validators::not_empty(raw) {
            return Err(DomainError::validation("Email cannot be empty", "email"));
        }

        let trimmed = raw.trim();
        if !validators::is_valid_email(trimmed) {
            return Err(DomainError::validation("Invalid email format", "email"));
        }

        Ok(Self(trimmed.to_lowercase()))
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
