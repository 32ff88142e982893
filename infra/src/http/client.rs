//! Thin JSON client over reqwest.
//!
//! Attaches the persisted access token as a bearer header on every request,
//! maps 401/404 to their dedicated error variants, and decodes JSON bodies.
//! Retry policy and caching are out of scope; timeouts come from the config.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use taskly_core::storage::KeyValueStore;
use taskly_shared::config::ApiConfig;

use crate::TOKEN_STORAGE_KEY;

use super::ApiError;

/// JSON HTTP client bound to a base URL.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn KeyValueStore>,
}

impl HttpClient {
    /// Builds a client from the API configuration.
    ///
    /// The storage handle is consulted on every request for the access
    /// token; requests made before login simply go out unauthenticated.
    pub fn new(config: &ApiConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        self.send(self.client.get(self.url(path))).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    /// POST where the response body is empty or irrelevant
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!(path, "POST");
        let response = self
            .authorize(self.client.post(self.url(path)).json(body))
            .await
            .send()
            .await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "PATCH");
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self
            .authorize(self.client.delete(self.url(path)))
            .await
            .send()
            .await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the bearer token when one is stored
    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.storage.get_item(TOKEN_STORAGE_KEY).await {
            Ok(Some(token)) => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.authorize(request).await.send().await?;
        let response = Self::ensure_success(response).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Maps non-success statuses to errors, passing successful responses through
    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskly_core::storage::MemoryStore;

    fn client(base_url: &str) -> HttpClient {
        let config = ApiConfig::new(base_url);
        HttpClient::new(&config, Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_trailing_slash_is_stripped_from_base_url() {
        let client = client("http://localhost:3000/");
        assert_eq!(client.url("/todos"), "http://localhost:3000/todos");
    }

    #[test]
    fn test_url_joins_path() {
        let client = client("https://api.taskly.app");
        assert_eq!(client.url("/auth/login"), "https://api.taskly.app/auth/login");
    }
}
