//! Authentication commands, queries, and the root facade.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::User;
use crate::errors::DomainResult;
use crate::repositories::UserRepository;
use crate::services::auth_validation;

/// Login input
#[derive(Debug, Clone)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Validates credentials and delegates the login to the repository
pub struct LoginCommand<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> LoginCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: &LoginPayload) -> DomainResult<User> {
        auth_validation::validate_login_payload(&payload.email, &payload.password)?;
        let user = self
            .repository
            .login(&payload.email, &payload.password)
            .await?;
        info!(user_id = %user.id, "user logged in");
        Ok(user)
    }
}

/// Validates the registration payload and delegates to the repository
pub struct RegisterCommand<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> RegisterCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, payload: &RegisterPayload) -> DomainResult<User> {
        auth_validation::validate_register_payload(
            &payload.email,
            &payload.password,
            &payload.confirm_password,
            &payload.first_name,
            &payload.last_name,
        )?;
        let user = self
            .repository
            .register(
                &payload.email,
                &payload.password,
                &payload.first_name,
                &payload.last_name,
            )
            .await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

/// Ends the current session
pub struct LogoutCommand<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> LogoutCommand<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<()> {
        self.repository.logout().await?;
        info!("session ended");
        Ok(())
    }
}

/// Resolves the current session to a user, if any
pub struct GetCurrentUserQuery<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> GetCurrentUserQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<Option<User>> {
        self.repository.get_current_user().await
    }
}

/// Checks whether a token is still accepted
pub struct ValidateTokenQuery<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> ValidateTokenQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, token: &str) -> DomainResult<bool> {
        self.repository.validate_token(token).await
    }
}

/// Reads the persisted access token
pub struct GetStoredTokenQuery<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> GetStoredTokenQuery<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<Option<String>> {
        self.repository.get_token().await
    }
}

/// Single entry point for authentication operations.
pub struct AuthUseCases<R: UserRepository> {
    login_cmd: LoginCommand<R>,
    register_cmd: RegisterCommand<R>,
    logout_cmd: LogoutCommand<R>,
    get_current_user_query: GetCurrentUserQuery<R>,
    validate_token_query: ValidateTokenQuery<R>,
    get_stored_token_query: GetStoredTokenQuery<R>,
}

impl<R: UserRepository> AuthUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            login_cmd: LoginCommand::new(Arc::clone(&repository)),
            register_cmd: RegisterCommand::new(Arc::clone(&repository)),
            logout_cmd: LogoutCommand::new(Arc::clone(&repository)),
            get_current_user_query: GetCurrentUserQuery::new(Arc::clone(&repository)),
            validate_token_query: ValidateTokenQuery::new(Arc::clone(&repository)),
            get_stored_token_query: GetStoredTokenQuery::new(repository),
        }
    }

    // Command operations (writes)

    pub async fn login(&self, payload: &LoginPayload) -> DomainResult<User> {
        self.login_cmd.execute(payload).await
    }

    pub async fn register(&self, payload: &RegisterPayload) -> DomainResult<User> {
        self.register_cmd.execute(payload).await
    }

    pub async fn logout(&self) -> DomainResult<()> {
        self.logout_cmd.execute().await
    }

    // Query operations (reads)

    pub async fn get_current_user(&self) -> DomainResult<Option<User>> {
        self.get_current_user_query.execute().await
    }

    pub async fn validate_token(&self, token: &str) -> DomainResult<bool> {
        self.validate_token_query.execute(token).await
    }

    pub async fn get_stored_token(&self) -> DomainResult<Option<String>> {
        self.get_stored_token_query.execute().await
    }
}
