//! Todo repository over the todo gateway.

use async_trait::async_trait;
use uuid::Uuid;

use taskly_core::domain::entities::{NewTodo, Todo};
use taskly_core::errors::{DomainError, DomainResult};
use taskly_core::repositories::TodoRepository;

use crate::api::TodoGateway;
use crate::dto::{CreateTodoRequest, UpdateTodoRequest};
use crate::http::ApiError;
use crate::mappers::todo as todo_mapper;
use crate::mappers::todo::to_domain_list;

/// `TodoRepository` backed by the remote todo API.
pub struct HttpTodoRepository<G: TodoGateway> {
    gateway: G,
}

impl<G: TodoGateway> HttpTodoRepository<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Attaches the todo id to 404s so callers see a proper not-found error.
    fn map_error(error: ApiError, id: Uuid) -> DomainError {
        match error {
            ApiError::NotFound => DomainError::not_found("Todo", id.to_string()),
            other => other.into_domain(),
        }
    }
}

#[async_trait]
impl<G: TodoGateway> TodoRepository for HttpTodoRepository<G> {
    async fn get_all(&self) -> DomainResult<Vec<Todo>> {
        let dtos = self.gateway.list().await.map_err(ApiError::into_domain)?;
        to_domain_list(dtos)
    }

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Todo> {
        let dto = self
            .gateway
            .get(&id.to_string())
            .await
            .map_err(|e| Self::map_error(e, id))?;
        todo_mapper::to_domain(dto)
    }

    async fn create(&self, todo: NewTodo) -> DomainResult<Todo> {
        let request = CreateTodoRequest {
            title: todo.title,
            description: todo.description,
            due_date: todo.due_date.map(crate::mappers::format_timestamp),
        };
        let dto = self
            .gateway
            .create(request)
            .await
            .map_err(ApiError::into_domain)?;
        todo_mapper::to_domain(dto)
    }

    async fn update(&self, todo: Todo) -> DomainResult<Todo> {
        let request = UpdateTodoRequest {
            title: Some(todo.title),
            description: Some(todo.description),
            is_completed: Some(todo.is_completed),
            due_date: todo.due_date.map(crate::mappers::format_timestamp),
        };
        let dto = self
            .gateway
            .update(&todo.id.to_string(), request)
            .await
            .map_err(|e| Self::map_error(e, todo.id))?;
        todo_mapper::to_domain(dto)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.gateway
            .delete(&id.to_string())
            .await
            .map_err(|e| Self::map_error(e, id))
    }

    async fn toggle(&self, id: Uuid) -> DomainResult<Todo> {
        let dto = self
            .gateway
            .toggle(&id.to_string())
            .await
            .map_err(|e| Self::map_error(e, id))?;
        todo_mapper::to_domain(dto)
    }

    async fn get_completed(&self) -> DomainResult<Vec<Todo>> {
        let dtos = self
            .gateway
            .list_by_status(true)
            .await
            .map_err(ApiError::into_domain)?;
        to_domain_list(dtos)
    }

    async fn get_pending(&self) -> DomainResult<Vec<Todo>> {
        let dtos = self
            .gateway
            .list_by_status(false)
            .await
            .map_err(ApiError::into_domain)?;
        to_domain_list(dtos)
    }
}
