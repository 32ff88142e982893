//! Transport-level error type.

use thiserror::Error;

use taskly_core::errors::DomainError;

/// Errors produced by the HTTP transport and gateways.
///
/// `Unauthorized` and `NotFound` get their own variants because repository
/// implementations branch on them; everything else is carried opaquely.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Resource not found")]
    NotFound,

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Maps this error into the domain taxonomy without resource context.
    ///
    /// `NotFound` is intentionally not handled here: repositories translate
    /// it themselves so the resulting `DomainError::NotFound` can carry the
    /// resource type and id.
    pub fn into_domain(self) -> DomainError {
        match self {
            ApiError::Unauthorized => DomainError::unauthorized("Unauthorized"),
            other => DomainError::internal(other.to_string()),
        }
    }
}
