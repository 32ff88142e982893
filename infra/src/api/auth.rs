//! Auth endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::dto::{
    AuthResponseDto, LoginRequest, RefreshRequest, RegisterRequest, UserDto,
    ValidateTokenRequest, ValidateTokenResponse,
};
use crate::http::{ApiError, HttpClient};

/// Calls the backend auth endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponseDto, ApiError>;

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponseDto, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    /// Fetches the profile of the user the bearer token belongs to.
    async fn current_user(&self) -> Result<UserDto, ApiError>;

    /// Asks the backend whether a token is still accepted.
    async fn validate_token(&self, token: &str) -> Result<bool, ApiError>;

    /// Exchanges a refresh token for a fresh session.
    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponseDto, ApiError>;
}

#[async_trait]
impl<G: AuthGateway + ?Sized> AuthGateway for Arc<G> {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponseDto, ApiError> {
        (**self).login(request).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponseDto, ApiError> {
        (**self).register(request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        (**self).logout().await
    }

    async fn current_user(&self) -> Result<UserDto, ApiError> {
        (**self).current_user().await
    }

    async fn validate_token(&self, token: &str) -> Result<bool, ApiError> {
        (**self).validate_token(token).await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponseDto, ApiError> {
        (**self).refresh_token(refresh_token).await
    }
}

/// `AuthGateway` over the REST API.
pub struct RestAuthGateway {
    client: Arc<HttpClient>,
}

impl RestAuthGateway {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponseDto, ApiError> {
        self.client.post("/auth/login", &request).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponseDto, ApiError> {
        self.client.post("/auth/register", &request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_no_content("/auth/logout", &json!({})).await
    }

    async fn current_user(&self) -> Result<UserDto, ApiError> {
        self.client.get("/auth/me").await
    }

    async fn validate_token(&self, token: &str) -> Result<bool, ApiError> {
        let request = ValidateTokenRequest {
            token: token.to_string(),
        };
        let response: ValidateTokenResponse =
            self.client.post("/auth/validate-token", &request).await?;
        Ok(response.valid)
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponseDto, ApiError> {
        debug!("refreshing session");
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.client.post("/auth/refresh", &request).await
    }
}
