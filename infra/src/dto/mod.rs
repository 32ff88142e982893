//! Wire types for the remote API.
//!
//! The backend speaks camelCase JSON with RFC 3339 timestamps; these types
//! mirror that shape exactly and never leak past the mappers.

pub mod auth;
pub mod todo;

pub use auth::{
    AuthResponseDto, LoginRequest, RefreshRequest, RegisterRequest, UserDto,
    ValidateTokenRequest, ValidateTokenResponse,
};
pub use todo::{CreateTodoRequest, TodoDto, UpdateTodoRequest};
