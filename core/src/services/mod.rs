//! Application services composing value-object validation into
//! payload-level checks, plus pure todo filtering helpers.

pub mod auth_validation;
pub mod todo_filter;
pub mod todo_validation;
