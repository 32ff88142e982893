//! Wires the whole stack together: config -> HTTP client -> gateways ->
//! repositories -> use cases.

use std::sync::Arc;

use taskly_core::storage::KeyValueStore;
use taskly_core::use_cases::{AuthUseCases, TodoUseCases};
use taskly_shared::config::ApiConfig;

use crate::api::{RestAuthGateway, RestTodoGateway};
use crate::http::{ApiError, HttpClient};
use crate::repositories::{HttpTodoRepository, HttpUserRepository};

/// Fully wired entry point for host applications.
///
/// The caller supplies the key-value store (platform keychain, secure
/// storage, or [`taskly_core::storage::MemoryStore`] in tests); everything
/// else is built here.
pub struct AppContext {
    pub auth: AuthUseCases<HttpUserRepository<RestAuthGateway>>,
    pub todos: TodoUseCases<HttpTodoRepository<RestTodoGateway>>,
}

impl AppContext {
    pub fn new(config: &ApiConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        let client = Arc::new(HttpClient::new(config, Arc::clone(&storage))?);

        let user_repository = HttpUserRepository::new(
            RestAuthGateway::new(Arc::clone(&client)),
            Arc::clone(&storage),
        );
        let todo_repository = HttpTodoRepository::new(RestTodoGateway::new(client));

        Ok(Self {
            auth: AuthUseCases::new(Arc::new(user_repository)),
            todos: TodoUseCases::new(Arc::new(todo_repository)),
        })
    }

    /// Builds a context from `TASKLY_*` environment variables, loading a
    /// `.env` file first when one exists.
    pub fn from_env(storage: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        let config = ApiConfig::from_env().map_err(ApiError::Config)?;
        Self::new(&config, storage)
    }
}
