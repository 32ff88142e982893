//! Remote API configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the remote Taskly API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash (e.g. `https://api.taskly.app`)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Creates a configuration with the given base URL and the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Creates a configuration from environment variables
    ///
    /// Reads `TASKLY_API_BASE_URL` (required) and `TASKLY_API_TIMEOUT_SECS`
    /// (optional, defaults to 10 seconds).
    pub fn from_env() -> Result<Self, String> {
        let base_url = std::env::var("TASKLY_API_BASE_URL")
            .map_err(|_| "TASKLY_API_BASE_URL not set".to_string())?;

        let timeout_secs = std::env::var("TASKLY_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_timeout() {
        let config = ApiConfig::new("https://api.taskly.app");
        assert_eq!(config.base_url, "https://api.taskly.app");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
