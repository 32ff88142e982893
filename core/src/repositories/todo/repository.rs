//! Todo repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{NewTodo, Todo};
use crate::errors::DomainResult;

/// Port for todo persistence, implemented against the remote API.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos belonging to the current user
    async fn get_all(&self) -> DomainResult<Vec<Todo>>;

    /// A single todo by id
    ///
    /// # Returns
    /// * `Ok(Todo)` - The todo
    /// * `Err(DomainError::NotFound)` - No todo with the given id
    async fn get_by_id(&self, id: Uuid) -> DomainResult<Todo>;

    /// Creates a todo and returns it with backend-assigned id and timestamps
    async fn create(&self, todo: NewTodo) -> DomainResult<Todo>;

    /// Replaces an existing todo
    async fn update(&self, todo: Todo) -> DomainResult<Todo>;

    /// Deletes a todo by id
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Flips a todo's completion status and returns the updated record
    async fn toggle(&self, id: Uuid) -> DomainResult<Todo>;

    /// Completed todos only
    async fn get_completed(&self) -> DomainResult<Vec<Todo>>;

    /// Pending (not completed) todos only
    async fn get_pending(&self) -> DomainResult<Vec<Todo>>;
}
