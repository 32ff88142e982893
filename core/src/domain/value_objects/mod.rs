//! Self-validating value objects.
//!
//! Each constructor either returns a normalized instance or fails with a
//! `DomainError::Validation` naming the offending field. Instances are
//! immutable and compared by normalized value.

pub mod auth_token;
pub mod email;
pub mod full_name;
pub mod password;
pub mod todo_description;
pub mod todo_title;

pub use auth_token::AuthToken;
pub use email::Email;
pub use full_name::FullName;
pub use password::Password;
pub use todo_description::TodoDescription;
pub use todo_title::TodoTitle;
