//! Mock implementation of TodoRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{NewTodo, Todo};
use crate::errors::{DomainError, DomainResult};

use super::repository::TodoRepository;

/// In-memory todo store for testing
pub struct MockTodoRepository {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl MockTodoRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seeds an existing todo
    pub async fn with_todo(self, todo: Todo) -> Self {
        {
            let mut todos = self.todos.write().await;
            todos.insert(todo.id, todo);
        }
        self
    }
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn get_all(&self) -> DomainResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> DomainResult<Todo> {
        let todos = self.todos.read().await;
        todos
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Todo", id.to_string()))
    }

    async fn create(&self, todo: NewTodo) -> DomainResult<Todo> {
        let mut todos = self.todos.write().await;
        let now = Utc::now();
        let created = Todo {
            id: Uuid::new_v4(),
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
            user_id: todo.user_id,
            due_date: todo.due_date,
            created_at: now,
            updated_at: now,
        };
        todos.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, todo: Todo) -> DomainResult<Todo> {
        let mut todos = self.todos.write().await;
        if !todos.contains_key(&todo.id) {
            return Err(DomainError::not_found("Todo", todo.id.to_string()));
        }
        todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut todos = self.todos.write().await;
        todos
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Todo", id.to_string()))
    }

    async fn toggle(&self, id: Uuid) -> DomainResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Todo", id.to_string()))?;
        todo.is_completed = !todo.is_completed;
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn get_completed(&self) -> DomainResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().filter(|t| t.is_completed).cloned().collect())
    }

    async fn get_pending(&self) -> DomainResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|t| !t.is_completed)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: String::new(),
            is_completed: false,
            user_id: Uuid::nil(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let repo = MockTodoRepository::new();
        let created = repo.create(new_todo("Buy milk")).await.unwrap();
        assert_eq!(created.title, "Buy milk");
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let repo = MockTodoRepository::new();
        let id = Uuid::new_v4();
        let err = repo.get_by_id(id).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Todo", id.to_string()));
    }

    #[tokio::test]
    async fn test_toggle_flips_completion() {
        let repo = MockTodoRepository::new();
        let created = repo.create(new_todo("Buy milk")).await.unwrap();

        let toggled = repo.toggle(created.id).await.unwrap();
        assert!(toggled.is_completed);

        let toggled_back = repo.toggle(created.id).await.unwrap();
        assert!(!toggled_back.is_completed);
    }

    #[tokio::test]
    async fn test_status_filters() {
        let repo = MockTodoRepository::new();
        let open = repo.create(new_todo("open")).await.unwrap();
        let done = repo.create(new_todo("done")).await.unwrap();
        repo.toggle(done.id).await.unwrap();

        let completed = repo.get_completed().await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, done.id);

        let pending = repo.get_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, open.id);
    }
}
