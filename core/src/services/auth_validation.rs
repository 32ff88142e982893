//! Payload validation for authentication flows.
//!
//! Checks run sequentially and the first failure wins, so callers see at
//! most one error per attempt: email before password, password before the
//! confirmation mismatch, mismatch before the name checks.

use crate::domain::value_objects::{Email, FullName, Password};
use crate::errors::{DomainError, DomainResult};

/// Characters counted as "special" by the strength heuristic
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Score at or above which a password counts as strong
const STRONG_SCORE: u8 = 4;

/// Result of the password strength heuristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub is_strong: bool,
    /// Sum of the weighted criteria, in [0, 6]
    pub score: u8,
    /// One entry per unmet criterion, in fixed order:
    /// length, uppercase, lowercase, number, special character
    pub feedback: Vec<String>,
}

/// Validates a login payload
pub fn validate_login_payload(email: &str, password: &str) -> DomainResult<()> {
    Email::new(email)?;
    Password::new(password)?;
    Ok(())
}

/// Validates a registration payload
pub fn validate_register_payload(
    email: &str,
    password: &str,
    confirm_password: &str,
    first_name: &str,
    last_name: &str,
) -> DomainResult<()> {
    Email::new(email)?;
    Password::new(password)?;

    // Byte-for-byte comparison; no trimming or normalization
    if password != confirm_password {
        return Err(DomainError::validation(
            "Passwords do not match",
            "confirmPassword",
        ));
    }

    FullName::new(first_name, last_name)?;
    Ok(())
}

/// Scores a password against five independent criteria.
///
/// Length ≥ 12 scores 2, length in [8, 12) scores 1; presence of an
/// uppercase letter, lowercase letter, digit, and special character each
/// score 1. The maximum achievable score is 6.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut feedback = Vec::new();
    let mut score: u8 = 0;

    let length = password.chars().count();
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    } else {
        feedback.push("Password should be at least 8 characters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        feedback.push("Include at least one uppercase letter".to_string());
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        feedback.push("Include at least one lowercase letter".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        feedback.push("Include at least one number".to_string());
    }

    if password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        score += 1;
    } else {
        feedback.push("Include at least one special character".to_string());
    }

    PasswordStrength {
        is_strong: score >= STRONG_SCORE,
        score,
        feedback,
    }
}
