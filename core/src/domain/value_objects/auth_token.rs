//! Bearer token value object.

use std::fmt;

use taskly_shared::utils::validation::validators;

use crate::errors::{DomainError, DomainResult};

/// An opaque bearer token, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if !validators::not_empty(raw) {
            return Err(DomainError::validation("Token cannot be empty", "token"));
        }

        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
