//! Configuration structures for the client SDK.

pub mod api;

pub use api::ApiConfig;
