//! # Infrastructure Layer
//!
//! Concrete adapters behind the core's ports: a reqwest-based HTTP client,
//! REST gateways for the auth and todo endpoints, DTO mappers, repository
//! implementations (including the token refresh orchestration), and the
//! composition root that wires the object graph together.

pub mod api;
pub mod bootstrap;
pub mod dto;
pub mod http;
pub mod mappers;
pub mod repositories;

// Re-export core types for convenience
pub use taskly_core::errors::{DomainError, DomainResult};

/// Storage key under which the access token is persisted
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Storage key under which the refresh token is persisted
pub const REFRESH_TOKEN_STORAGE_KEY: &str = "auth_refresh_token";
