//! Todo endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::dto::{CreateTodoRequest, TodoDto, UpdateTodoRequest};
use crate::http::{ApiError, HttpClient};

/// Calls the backend todo endpoints.
#[async_trait]
pub trait TodoGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<TodoDto>, ApiError>;

    /// Lists todos filtered by completion status on the server side.
    async fn list_by_status(&self, completed: bool) -> Result<Vec<TodoDto>, ApiError>;

    async fn get(&self, id: &str) -> Result<TodoDto, ApiError>;

    async fn create(&self, request: CreateTodoRequest) -> Result<TodoDto, ApiError>;

    async fn update(&self, id: &str, request: UpdateTodoRequest) -> Result<TodoDto, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    async fn toggle(&self, id: &str) -> Result<TodoDto, ApiError>;
}

#[async_trait]
impl<G: TodoGateway + ?Sized> TodoGateway for Arc<G> {
    async fn list(&self) -> Result<Vec<TodoDto>, ApiError> {
        (**self).list().await
    }

    async fn list_by_status(&self, completed: bool) -> Result<Vec<TodoDto>, ApiError> {
        (**self).list_by_status(completed).await
    }

    async fn get(&self, id: &str) -> Result<TodoDto, ApiError> {
        (**self).get(id).await
    }

    async fn create(&self, request: CreateTodoRequest) -> Result<TodoDto, ApiError> {
        (**self).create(request).await
    }

    async fn update(&self, id: &str, request: UpdateTodoRequest) -> Result<TodoDto, ApiError> {
        (**self).update(id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete(id).await
    }

    async fn toggle(&self, id: &str) -> Result<TodoDto, ApiError> {
        (**self).toggle(id).await
    }
}

/// `TodoGateway` over the REST API.
pub struct RestTodoGateway {
    client: Arc<HttpClient>,
}

impl RestTodoGateway {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TodoGateway for RestTodoGateway {
    async fn list(&self) -> Result<Vec<TodoDto>, ApiError> {
        self.client.get("/todos").await
    }

    async fn list_by_status(&self, completed: bool) -> Result<Vec<TodoDto>, ApiError> {
        let status = if completed { "completed" } else { "pending" };
        self.client.get(&format!("/todos?status={status}")).await
    }

    async fn get(&self, id: &str) -> Result<TodoDto, ApiError> {
        self.client.get(&format!("/todos/{id}")).await
    }

    async fn create(&self, request: CreateTodoRequest) -> Result<TodoDto, ApiError> {
        self.client.post("/todos", &request).await
    }

    async fn update(&self, id: &str, request: UpdateTodoRequest) -> Result<TodoDto, ApiError> {
        self.client.put(&format!("/todos/{id}"), &request).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/todos/{id}")).await
    }

    async fn toggle(&self, id: &str) -> Result<TodoDto, ApiError> {
        self.client
            .patch(&format!("/todos/{id}/toggle"), &json!({}))
            .await
    }
}
