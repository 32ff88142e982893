use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use taskly_core::domain::entities::NewTodo;
use taskly_core::errors::DomainError;
use taskly_core::repositories::TodoRepository;

use crate::api::TodoGateway;
use crate::dto::{CreateTodoRequest, TodoDto, UpdateTodoRequest};
use crate::http::ApiError;
use crate::repositories::HttpTodoRepository;

use super::{init_tracing, sample_todo_dto, TODO_ID, USER_ID};

/// Records requests and replays canned responses.
#[derive(Default)]
struct StubTodoGateway {
    todos: Vec<TodoDto>,
    missing: bool,
    list_calls: AtomicUsize,
    status_filters: Mutex<Vec<bool>>,
    created: Mutex<Vec<CreateTodoRequest>>,
    updated: Mutex<Vec<(String, UpdateTodoRequest)>>,
    deleted: Mutex<Vec<String>>,
}

impl StubTodoGateway {
    fn first_todo(&self) -> Result<TodoDto, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound);
        }
        self.todos.first().cloned().ok_or(ApiError::NotFound)
    }
}

#[async_trait]
impl TodoGateway for StubTodoGateway {
    async fn list(&self) -> Result<Vec<TodoDto>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.todos.clone())
    }

    async fn list_by_status(&self, completed: bool) -> Result<Vec<TodoDto>, ApiError> {
        self.status_filters.lock().unwrap().push(completed);
        Ok(self
            .todos
            .iter()
            .filter(|t| t.is_completed == completed)
            .cloned()
            .collect())
    }

    async fn get(&self, _id: &str) -> Result<TodoDto, ApiError> {
        self.first_todo()
    }

    async fn create(&self, request: CreateTodoRequest) -> Result<TodoDto, ApiError> {
        let mut dto = sample_todo_dto();
        dto.title = request.title.clone();
        dto.description = request.description.clone();
        dto.due_date = request.due_date.clone();
        self.created.lock().unwrap().push(request);
        Ok(dto)
    }

    async fn update(&self, id: &str, request: UpdateTodoRequest) -> Result<TodoDto, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound);
        }
        let mut dto = sample_todo_dto();
        if let Some(title) = &request.title {
            dto.title = title.clone();
        }
        if let Some(is_completed) = request.is_completed {
            dto.is_completed = is_completed;
        }
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), request));
        Ok(dto)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        if self.missing {
            return Err(ApiError::NotFound);
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn toggle(&self, _id: &str) -> Result<TodoDto, ApiError> {
        let mut dto = self.first_todo()?;
        dto.is_completed = !dto.is_completed;
        Ok(dto)
    }
}

fn repository(gateway: StubTodoGateway) -> (HttpTodoRepository<Arc<StubTodoGateway>>, Arc<StubTodoGateway>) {
    init_tracing();
    let gateway = Arc::new(gateway);
    (HttpTodoRepository::new(Arc::clone(&gateway)), gateway)
}

fn todo_id() -> Uuid {
    Uuid::parse_str(TODO_ID).unwrap()
}

#[tokio::test]
async fn test_get_all_maps_wire_records() {
    let (repo, gateway) = repository(StubTodoGateway {
        todos: vec![sample_todo_dto()],
        ..Default::default()
    });

    let todos = repo.get_all().await.unwrap();

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, todo_id());
    assert_eq!(todos[0].title, "Buy milk");
    assert_eq!(gateway.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_get_by_id_maps_404_to_not_found() {
    let (repo, _) = repository(StubTodoGateway {
        missing: true,
        ..Default::default()
    });
    let id = todo_id();

    let err = repo.get_by_id(id).await.unwrap_err();

    assert_eq!(err, DomainError::not_found("Todo", id.to_string()));
}

#[tokio::test]
async fn test_create_sends_formatted_due_date() {
    let (repo, gateway) = repository(StubTodoGateway::default());
    let due = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();

    let todo = repo
        .create(NewTodo {
            title: "Call dentist".to_string(),
            description: String::new(),
            is_completed: false,
            user_id: Uuid::parse_str(USER_ID).unwrap(),
            due_date: Some(due),
        })
        .await
        .unwrap();

    let created = gateway.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Call dentist");
    assert_eq!(
        created[0].due_date,
        Some("2026-04-01T09:00:00.000Z".to_string())
    );
    assert_eq!(todo.due_date, Some(due));
}

#[tokio::test]
async fn test_update_sends_every_field() {
    let (repo, gateway) = repository(StubTodoGateway {
        todos: vec![sample_todo_dto()],
        ..Default::default()
    });
    let mut todo = crate::mappers::todo::to_domain(sample_todo_dto()).unwrap();
    todo.title = "Buy oat milk".to_string();
    todo.is_completed = true;

    let updated = repo.update(todo).await.unwrap();

    assert_eq!(updated.title, "Buy oat milk");
    assert!(updated.is_completed);

    let requests = gateway.updated.lock().unwrap();
    let (id, request) = &requests[0];
    assert_eq!(id, TODO_ID);
    assert_eq!(request.title, Some("Buy oat milk".to_string()));
    assert_eq!(request.description, Some("2 litres".to_string()));
    assert_eq!(request.is_completed, Some(true));
}

#[tokio::test]
async fn test_delete_targets_the_given_id() {
    let (repo, gateway) = repository(StubTodoGateway {
        todos: vec![sample_todo_dto()],
        ..Default::default()
    });

    repo.delete(todo_id()).await.unwrap();

    assert_eq!(*gateway.deleted.lock().unwrap(), vec![TODO_ID.to_string()]);
}

#[tokio::test]
async fn test_toggle_returns_flipped_record() {
    let (repo, _) = repository(StubTodoGateway {
        todos: vec![sample_todo_dto()],
        ..Default::default()
    });

    let todo = repo.toggle(todo_id()).await.unwrap();

    assert!(todo.is_completed);
}

#[tokio::test]
async fn test_status_queries_use_server_side_filter() {
    let mut completed = sample_todo_dto();
    completed.is_completed = true;
    let (repo, gateway) = repository(StubTodoGateway {
        todos: vec![sample_todo_dto(), completed],
        ..Default::default()
    });

    let done = repo.get_completed().await.unwrap();
    let pending = repo.get_pending().await.unwrap();

    assert_eq!(done.len(), 1);
    assert!(done[0].is_completed);
    assert_eq!(pending.len(), 1);
    assert!(!pending[0].is_completed);
    assert_eq!(*gateway.status_filters.lock().unwrap(), vec![true, false]);
}
