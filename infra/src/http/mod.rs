//! HTTP transport: the reqwest wrapper and its error type.

mod client;
mod error;

pub use client::HttpClient;
pub use error::ApiError;
