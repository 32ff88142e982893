//! Mock implementation of UserRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::{DomainError, DomainResult};

use super::repository::UserRepository;

/// In-memory fake of the authentication backend.
///
/// Accounts registered through `register` (or seeded with `with_account`)
/// can log in with their password; a successful login establishes a session
/// token that `get_current_user` resolves until `logout` clears it.
pub struct MockUserRepository {
    state: Arc<RwLock<MockState>>,
}

#[derive(Default)]
struct MockState {
    accounts: HashMap<String, (User, String)>,
    token: Option<String>,
    session_user: Option<User>,
}

impl MockUserRepository {
    /// Create a new mock repository with no accounts
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState::default())),
        }
    }

    /// Seeds an account that can subsequently log in
    pub async fn with_account(self, user: User, password: &str) -> Self {
        {
            let mut state = self.state.write().await;
            state
                .accounts
                .insert(user.email.clone(), (user, password.to_string()));
        }
        self
    }

    fn issue_token() -> String {
        format!("mock-token-{}", Uuid::new_v4())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let mut state = self.state.write().await;

        let (user, stored_password) = state
            .accounts
            .get(email)
            .cloned()
            .ok_or_else(|| DomainError::unauthorized("Invalid credentials"))?;

        if stored_password != password {
            return Err(DomainError::unauthorized("Invalid credentials"));
        }

        state.token = Some(Self::issue_token());
        state.session_user = Some(user.clone());
        Ok(user)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<User> {
        let mut state = self.state.write().await;

        if state.accounts.contains_key(email) {
            return Err(DomainError::validation("Email already registered", "email"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            is_email_verified: false,
            created_at: now,
            updated_at: now,
        };

        state
            .accounts
            .insert(email.to_string(), (user.clone(), password.to_string()));
        state.token = Some(Self::issue_token());
        state.session_user = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state.token = None;
        state.session_user = None;
        Ok(())
    }

    async fn get_current_user(&self) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        if state.token.is_none() {
            return Ok(None);
        }
        Ok(state.session_user.clone())
    }

    async fn save_token(&self, token: &str) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state.token = Some(token.to_string());
        Ok(())
    }

    async fn get_token(&self) -> DomainResult<Option<String>> {
        let state = self.state.read().await;
        Ok(state.token.clone())
    }

    async fn clear_token(&self) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state.token = None;
        Ok(())
    }

    async fn validate_token(&self, token: &str) -> DomainResult<bool> {
        let state = self.state.read().await;
        Ok(state.token.as_deref() == Some(token))
    }
}
