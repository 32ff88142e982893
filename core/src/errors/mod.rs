//! Domain-specific error types and error handling.
//!
//! A single tagged enum carries every failure the client architecture can
//! produce, letting call sites branch on the variant instead of downcasting.
//! Validation failures carry the offending field name so presentation code
//! can attach messages to the right input.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Local, synchronous input rejection; never reaches the network
    #[error("{message}")]
    Validation { message: String, field: String },

    /// Session or credential invalidity
    #[error("{message}")]
    Unauthorized { message: String },

    /// A 404 from the transport mapped to a domain-meaningful error
    #[error("{resource_type} with ID {resource_id} not found")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Opaque transport or infrastructure failure, propagated unchanged
    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    /// Creates a validation error for the given field
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.into(),
        }
    }

    /// Creates an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a not-found error for a resource
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Creates an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the field associated with a validation error, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether this error represents an invalid session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
