//! User repository over the auth gateway and a key-value token cache.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use taskly_core::domain::entities::User;
use taskly_core::domain::services::token_validation::{is_token_expired, validate_token_format};
use taskly_core::errors::DomainResult;
use taskly_core::repositories::UserRepository;
use taskly_core::storage::KeyValueStore;

use crate::api::AuthGateway;
use crate::dto::{AuthResponseDto, LoginRequest, RegisterRequest};
use crate::http::ApiError;
use crate::mappers::user as user_mapper;
use crate::{REFRESH_TOKEN_STORAGE_KEY, TOKEN_STORAGE_KEY};

/// `UserRepository` backed by the remote auth API, caching tokens in the
/// injected key-value store.
///
/// Session refresh is single-flight per repository instance: concurrent
/// `get_current_user` calls that both observe an expired access token
/// serialize on an internal lock, and the loser re-reads the store instead
/// of issuing a second refresh call.
pub struct HttpUserRepository<G: AuthGateway> {
    gateway: G,
    storage: Arc<dyn KeyValueStore>,
    refresh_lock: Mutex<()>,
}

impl<G: AuthGateway> HttpUserRepository<G> {
    pub fn new(gateway: G, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            gateway,
            storage,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Stores both tokens from an auth response. The refresh token is only
    /// written when the backend returned one.
    async fn persist_session(&self, response: &AuthResponseDto) -> DomainResult<()> {
        self.storage
            .set_item(TOKEN_STORAGE_KEY, &response.token)
            .await?;
        if let Some(refresh_token) = &response.refresh_token {
            self.storage
                .set_item(REFRESH_TOKEN_STORAGE_KEY, refresh_token)
                .await?;
        }
        Ok(())
    }

    async fn clear_session(&self) -> DomainResult<()> {
        self.storage.remove_item(TOKEN_STORAGE_KEY).await?;
        self.storage.remove_item(REFRESH_TOKEN_STORAGE_KEY).await
    }

    /// Resolves the session via `GET /auth/me`. A rejected token is treated
    /// as "no session": the stale access token is dropped and `None` comes
    /// back. Other failures propagate.
    async fn fetch_current_user(&self) -> DomainResult<Option<User>> {
        match self.gateway.current_user().await {
            Ok(dto) => Ok(Some(user_mapper::to_domain(dto)?)),
            Err(ApiError::Unauthorized) => {
                debug!("access token rejected, dropping it");
                self.storage.remove_item(TOKEN_STORAGE_KEY).await?;
                Ok(None)
            }
            Err(other) => Err(other.into_domain()),
        }
    }

    /// Exchanges the stored refresh token for a new session.
    ///
    /// Holds the refresh lock for the whole exchange. After acquiring it,
    /// the stored access token is re-read: if a concurrent caller already
    /// refreshed, the new token is used as-is. A failed exchange clears
    /// both tokens; a missing refresh token just yields `None`.
    async fn refresh_session(&self) -> DomainResult<Option<User>> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(token) = self.storage.get_item(TOKEN_STORAGE_KEY).await? {
            if !is_token_expired(&token) {
                return self.fetch_current_user().await;
            }
        }

        let refresh_token = match self.storage.get_item(REFRESH_TOKEN_STORAGE_KEY).await? {
            Some(token) => token,
            None => return Ok(None),
        };

        match self.gateway.refresh_token(&refresh_token).await {
            Ok(response) => {
                self.persist_session(&response).await?;
                Ok(Some(user_mapper::to_domain(response.user)?))
            }
            Err(error) => {
                warn!(%error, "session refresh failed, clearing tokens");
                self.clear_session().await?;
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<G: AuthGateway> UserRepository for HttpUserRepository<G> {
    async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .gateway
            .login(request)
            .await
            .map_err(ApiError::into_domain)?;

        self.persist_session(&response).await?;
        user_mapper::to_domain(response.user)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<User> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        let response = self
            .gateway
            .register(request)
            .await
            .map_err(ApiError::into_domain)?;

        self.persist_session(&response).await?;
        user_mapper::to_domain(response.user)
    }

    async fn logout(&self) -> DomainResult<()> {
        if let Err(error) = self.gateway.logout().await {
            warn!(%error, "remote logout failed, clearing local session anyway");
        }
        self.clear_session().await
    }

    async fn get_current_user(&self) -> DomainResult<Option<User>> {
        let token = match self.storage.get_item(TOKEN_STORAGE_KEY).await? {
            Some(token) => token,
            None => return Ok(None),
        };

        if is_token_expired(&token) {
            return self.refresh_session().await;
        }

        self.fetch_current_user().await
    }

    async fn save_token(&self, token: &str) -> DomainResult<()> {
        self.storage.set_item(TOKEN_STORAGE_KEY, token).await
    }

    async fn get_token(&self) -> DomainResult<Option<String>> {
        self.storage.get_item(TOKEN_STORAGE_KEY).await
    }

    async fn clear_token(&self) -> DomainResult<()> {
        self.storage.remove_item(TOKEN_STORAGE_KEY).await
    }

    async fn validate_token(&self, token: &str) -> DomainResult<bool> {
        if !validate_token_format(token) || is_token_expired(token) {
            return Ok(false);
        }

        match self.gateway.validate_token(token).await {
            Ok(valid) => Ok(valid),
            Err(error) => {
                debug!(%error, "remote token validation failed");
                Ok(false)
            }
        }
    }
}
