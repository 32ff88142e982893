//! Todo description value object.

use std::fmt;

use taskly_shared::utils::validation::validators;

use crate::errors::{DomainError, DomainResult};

/// Maximum description length in characters
pub const MAX_LENGTH: usize = 500;

/// A trimmed task description of at most 500 characters; empty is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoDescription(String);

impl TodoDescription {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        if !validators::length_between(trimmed, 0, MAX_LENGTH) {
            return Err(DomainError::validation(
                format!("Description cannot exceed {MAX_LENGTH} characters"),
                "description",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_allowed() {
        let description = TodoDescription::new("").unwrap();
        assert!(description.is_empty());
    }

    #[test]
    fn test_whitespace_collapses_to_empty() {
        let description = TodoDescription::new("   ").unwrap();
        assert!(description.is_empty());
    }

    #[test]
    fn test_description_is_trimmed() {
        let description = TodoDescription::new("  weekly groceries  ").unwrap();
        assert_eq!(description.as_str(), "weekly groceries");
    }

    #[test]
    fn test_too_long_description_rejected() {
        let err = TodoDescription::new(&"a".repeat(MAX_LENGTH + 1)).unwrap_err();
        assert_eq!(err.field(), Some("description"));
        assert_eq!(err.to_string(), "Description cannot exceed 500 characters");
    }

    #[test]
    fn test_exact_maximum_accepted() {
        assert!(TodoDescription::new(&"a".repeat(MAX_LENGTH)).is_ok());
    }
}
