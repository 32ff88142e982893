//! Domain entities.

pub mod todo;
pub mod token;
pub mod user;

pub use todo::{NewTodo, Todo};
pub use token::TokenPayload;
pub use user::User;
