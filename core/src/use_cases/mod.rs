//! Use-case commands and queries.
//!
//! Commands validate their payload and delegate to a repository port;
//! queries delegate directly. Neither catches or transforms repository
//! errors, keeping fail-fast validation strictly separated from transport
//! concerns. The root facades aggregate each bounded context into a single
//! callable surface.

pub mod auth;
pub mod todo;


pub use auth::{AuthUseCases, LoginPayload, RegisterPayload};
pub use todo::{CreateTodoPayload, TodoUseCases, UpdateTodoPayload};
