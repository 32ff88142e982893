//! Repository implementations over the remote gateways.

pub mod todo;
pub mod user;

#[cfg(test)]
mod tests;

pub use todo::HttpTodoRepository;
pub use user::HttpUserRepository;
