//! Domain services: pure logic operating on domain types.

pub mod token_validation;
