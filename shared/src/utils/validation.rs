//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Email pattern: `local@domain.tld` with no whitespace or extra `@` signs.
///
/// Deliberately simple; the backend performs the authoritative check.
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Common validation functions
pub mod validators {
    use super::EMAIL_REGEX;

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length (in characters) is within bounds, inclusive
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }

    /// Check if an email address is valid
    pub fn is_valid_email(email: &str) -> bool {
        matches_pattern(email, &EMAIL_REGEX)
    }
}
