//! Domain layer: entities, value objects, and domain services.

pub mod entities;
pub mod services;
pub mod value_objects;
