//! # Taskly Shared
//!
//! Cross-cutting utilities shared by the core and infrastructure crates:
//! configuration structs and common validation helpers.

pub mod config;
pub mod utils;
