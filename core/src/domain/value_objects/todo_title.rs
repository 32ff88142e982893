//! Todo title value object.

use std::fmt;

use taskly_shared::utils::validation::validators;

use crate::errors::{DomainError, DomainResult};

/// Minimum title length in characters
pub const MIN_LENGTH: usize = 3;

/// Maximum title length in characters
pub const MAX_LENGTH: usize = 100;

/// A trimmed task title between 3 and 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if !validators::not_empty(raw) {
            return Err(DomainError::validation("Title cannot be empty", "title"));
        }

        let trimmed = raw.trim();
        if !validators::length_between(trimmed, MIN_LENGTH, MAX_LENGTH) {
            let message = if trimmed.chars().count() > MAX_LENGTH {
                format!("Title cannot exceed {MAX_LENGTH} characters")
            } else {
                format!("Title must be at least {MIN_LENGTH} characters")
            };
            return Err(DomainError::validation(message, "title"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
