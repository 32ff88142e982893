//! Repository ports and their mock implementations.
//!
//! The traits are the contracts the use cases depend on; infrastructure
//! adapters implement them against the remote API, and the mocks back the
//! use-case tests.

pub mod todo;
pub mod user;

pub use todo::{MockTodoRepository, TodoRepository};
pub use user::{MockUserRepository, UserRepository};
