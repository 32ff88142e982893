//! Todo commands, queries, and the root facade.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{NewTodo, Todo};
use crate::errors::DomainResult;
use crate::repositories::TodoRepository;
use crate::services::todo_validation;

/// Creation input
#[derive(Debug, Clone)]
pub struct CreateTodoPayload {
    pub title: String,
    pub description: String,
    pub user_id: Uuid,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update input; absent fields keep their current values
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoPayload {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_completed: Option<bool>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Validates and creates a todo
pub struct CreateTodoCommand<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> CreateTodoCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: &CreateTodoPayload) -> DomainResult<Todo> {
        todo_validation::validate_create_payload(
            &payload.title,
            &payload.description,
            payload.due_date,
        )?;

        self.repository
            .create(NewTodo {
                title: payload.title.clone(),
                description: payload.description.clone(),
                is_completed: false,
                user_id: payload.user_id,
                due_date: payload.due_date,
            })
            .await
    }
}

/// Validates a partial update, merges it onto the stored todo, and persists
pub struct UpdateTodoCommand<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> UpdateTodoCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: &UpdateTodoPayload) -> DomainResult<Todo> {
        todo_validation::validate_update_payload(
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.due_date,
        )?;

        let existing = self.repository.get_by_id(payload.id).await?;

        let updated = Todo {
            title: payload.title.clone().unwrap_or(existing.title),
            description: payload.description.clone().unwrap_or(existing.description),
            is_completed: payload.is_completed.unwrap_or(existing.is_completed),
            due_date: payload.due_date.or(existing.due_date),
            updated_at: Utc::now(),
            ..existing
        };

        self.repository.update(updated).await
    }
}

/// Deletes a todo by id
pub struct DeleteTodoCommand<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> DeleteTodoCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> DomainResult<()> {
        self.repository.delete(id).await
    }
}

/// Flips a todo's completion status
pub struct ToggleTodoCommand<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> ToggleTodoCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> DomainResult<Todo> {
        self.repository.toggle(id).await
    }
}

/// Lists every todo
pub struct GetAllTodosQuery<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> GetAllTodosQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<Vec<Todo>> {
        self.repository.get_all().await
    }
}

/// Fetches a single todo
pub struct GetTodoByIdQuery<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> GetTodoByIdQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> DomainResult<Todo> {
        self.repository.get_by_id(id).await
    }
}

/// Lists completed todos
pub struct GetCompletedTodosQuery<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> GetCompletedTodosQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<Vec<Todo>> {
        self.repository.get_completed().await
    }
}

/// Lists pending todos
pub struct GetPendingTodosQuery<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> GetPendingTodosQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<Vec<Todo>> {
        self.repository.get_pending().await
    }
}

/// Single entry point for todo operations.
pub struct TodoUseCases<R: TodoRepository> {
    create_cmd: CreateTodoCommand<R>,
    update_cmd: UpdateTodoCommand<R>,
    delete_cmd: DeleteTodoCommand<R>,
    toggle_cmd: ToggleTodoCommand<R>,
    get_all_query: GetAllTodosQuery<R>,
    get_by_id_query: GetTodoByIdQuery<R>,
    get_completed_query: GetCompletedTodosQuery<R>,
    get_pending_query: GetPendingTodosQuery<R>,
}

impl<R: TodoRepository> TodoUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            create_cmd: CreateTodoCommand::new(Arc::clone(&repository)),
            update_cmd: UpdateTodoCommand::new(Arc::clone(&repository)),
            delete_cmd: DeleteTodoCommand::new(Arc::clone(&repository)),
            toggle_cmd: ToggleTodoCommand::new(Arc::clone(&repository)),
            get_all_query: GetAllTodosQuery::new(Arc::clone(&repository)),
            get_by_id_query: GetTodoByIdQuery::new(Arc::clone(&repository)),
            get_completed_query: GetCompletedTodosQuery::new(Arc::clone(&repository)),
            get_pending_query: GetPendingTodosQuery::new(repository),
        }
    }

    // Command operations (writes)

    pub async fn create_todo(&self, payload: &CreateTodoPayload) -> DomainResult<Todo> {
        self.create_cmd.execute(payload).await
    }

    pub async fn update_todo(&self, payload: &UpdateTodoPayload) -> DomainResult<Todo> {
        self.update_cmd.execute(payload).await
    }

    pub async fn delete_todo(&self, id: Uuid) -> DomainResult<()> {
        self.delete_cmd.execute(id).await
    }

    pub async fn toggle_todo(&self, id: Uuid) -> DomainResult<Todo> {
        self.toggle_cmd.execute(id).await
    }

    // Query operations (reads)

    pub async fn get_all_todos(&self) -> DomainResult<Vec<Todo>> {
        self.get_all_query.execute().await
    }

    pub async fn get_todo_by_id(&self, id: Uuid) -> DomainResult<Todo> {
        self.get_by_id_query.execute(id).await
    }

    pub async fn get_completed_todos(&self) -> DomainResult<Vec<Todo>> {
        self.get_completed_query.execute().await
    }

    pub async fn get_pending_todos(&self) -> DomainResult<Vec<Todo>> {
        self.get_pending_query.execute().await
    }
}
