//! Remote API gateways.
//!
//! Each gateway trait covers one backend resource. Repositories depend on
//! the traits so orchestration logic can be exercised against stubs.

pub mod auth;
pub mod todo;

pub use auth::{AuthGateway, RestAuthGateway};
pub use todo::{RestTodoGateway, TodoGateway};
