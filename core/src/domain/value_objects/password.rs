//! Password value object.

use taskly_shared::utils::validation::validators;

use crate::errors::{DomainError, DomainResult};

/// Minimum password length in characters
pub const MIN_LENGTH: usize = 8;

/// A raw password accepted from the user.
///
/// Stored verbatim; hashing is a backend concern. The `Debug` impl redacts
/// the value so passwords never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if !validators::not_empty(raw) {
            return Err(DomainError::validation(
                "Password cannot be empty",
                "password",
            ));
        }

        if raw.chars().count() < MIN_LENGTH {
            return Err(DomainError::validation(
                format!("Password must be at least {MIN_LENGTH} characters"),
                "password",
            ));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}
