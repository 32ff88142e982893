//! Full name value object.

use taskly_shared::utils::validation::validators;

use crate::errors::{DomainError, DomainResult};

/// Maximum length of each name part in characters
pub const MAX_PART_LENGTH: usize = 50;

/// A first/last name pair, each part trimmed and bounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    pub fn new(first_name: &str, last_name: &str) -> DomainResult<Self> {
        let first_name = Self::validate_part(first_name, "First name", "firstName")?;
        let last_name = Self::validate_part(last_name, "Last name", "lastName")?;

        Ok(Self {
            first_name,
            last_name,
        })
    }

    fn validate_part(raw: &str, label: &str, field: &str) -> DomainResult<String> {
        if !validators::not_empty(raw) {
            return Err(DomainError::validation(
                format!("{label} cannot be empty"),
                field,
            ));
        }

        let trimmed = raw.trim();
        if !validators::length_between(trimmed, 1, MAX_PART_LENGTH) {
            return Err(DomainError::validation(
                format!("{label} cannot exceed {MAX_PART_LENGTH} characters"),
                field,
            ));
        }

        Ok(trimmed.to_string())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The display form "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
