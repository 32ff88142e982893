//! # Taskly Core
//!
//! Core business logic for the Taskly client SDK. This crate contains the
//! domain entities and value objects, the token validation domain service,
//! application-level validation and filtering services, use-case commands and
//! queries, repository ports with mock implementations, and the error types
//! shared across the client architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod use_cases;

// Re-export commonly used types for convenience
pub use errors::{DomainError, DomainResult};
