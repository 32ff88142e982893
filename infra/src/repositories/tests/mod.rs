//! Scenario tests for the repository implementations, driven through stub
//! gateways and an in-memory store.

mod todo_repository_tests;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::dto::{AuthResponseDto, TodoDto, UserDto};

/// Installs a test-writer subscriber so `RUST_LOG` surfaces orchestration
/// logs during test runs. Safe to call from every test; only the first
/// call installs anything.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) const USER_ID: &str = "9f3b2c6a-1f4e-4d2b-8a6f-0c1d2e3f4a5b";
pub(crate) const TODO_ID: &str = "1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed";

/// Builds a JWT-shaped token expiring `exp_offset_secs` from now.
pub(crate) fn make_token(exp_offset_secs: i64) -> String {
    let exp = Utc::now().timestamp() + exp_offset_secs;
    let encode = |value: &str| STANDARD.encode(value).trim_end_matches('=').to_string();
    format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        encode(&json!({ "sub": USER_ID, "exp": exp }).to_string()),
        encode("signature")
    )
}

pub(crate) fn sample_user_dto() -> UserDto {
    UserDto {
        id: USER_ID.to_string(),
        email: "jane@example.com".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        is_email_verified: true,
        created_at: "2026-01-01T08:30:00.000Z".to_string(),
        updated_at: "2026-01-01T08:30:00.000Z".to_string(),
    }
}

pub(crate) fn sample_auth_response(token: &str, refresh_token: Option<&str>) -> AuthResponseDto {
    AuthResponseDto {
        user: sample_user_dto(),
        token: token.to_string(),
        refresh_token: refresh_token.map(str::to_string),
    }
}

pub(crate) fn sample_todo_dto() -> TodoDto {
    TodoDto {
        id: TODO_ID.to_string(),
        title: "Buy milk".to_string(),
        description: "2 litres".to_string(),
        is_completed: false,
        user_id: USER_ID.to_string(),
        due_date: None,
        created_at: "2026-03-01T12:00:00.000Z".to_string(),
        updated_at: "2026-03-01T12:00:00.000Z".to_string(),
    }
}
