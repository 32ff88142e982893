//! User repository port: authentication operations and token custody.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::DomainResult;

/// Port for authentication and session management.
///
/// Implementations translate these operations into remote API calls plus a
/// local token cache. The contract for `get_current_user` includes the
/// silent-refresh orchestration: an expired access token is transparently
/// exchanged using the stored refresh token before giving up on the session.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Authenticates with email and password, persisting the returned tokens
    ///
    /// # Returns
    /// * `Ok(User)` - Authenticated user; tokens are stored before returning
    /// * `Err(DomainError)` - Invalid credentials or transport failure
    async fn login(&self, email: &str, password: &str) -> DomainResult<User>;

    /// Registers a new account, persisting the returned tokens
    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<User>;

    /// Ends the session. Local tokens are always cleared; a failing remote
    /// call is swallowed, so this only errors when local cleanup fails.
    async fn logout(&self) -> DomainResult<()>;

    /// Resolves the current session to a user, refreshing an expired access
    /// token silently when a refresh token is available
    ///
    /// # Returns
    /// * `Ok(Some(User))` - A live session exists
    /// * `Ok(None)` - No session, or the session could not be restored
    /// * `Err(DomainError)` - Unexpected transport failure
    async fn get_current_user(&self) -> DomainResult<Option<User>>;

    /// Persists the access token
    async fn save_token(&self, token: &str) -> DomainResult<()>;

    /// Reads the persisted access token, if any
    async fn get_token(&self) -> DomainResult<Option<String>>;

    /// Removes the persisted access token
    async fn clear_token(&self) -> DomainResult<()>;

    /// Checks a token locally (shape and expiry) and then against the
    /// server. Collapses every failure to `false`; never errors.
    async fn validate_token(&self, token: &str) -> DomainResult<bool>;
}
