//! Conversions between wire DTOs and domain entities.

pub mod todo;
pub mod user;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use taskly_core::errors::{DomainError, DomainResult};

/// Parses an RFC 3339 timestamp into UTC.
pub(crate) fn parse_timestamp(value: &str, field: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::internal(format!("Invalid {field} timestamp: {e}")))
}

/// Formats a timestamp the way the backend emits them: RFC 3339 with
/// millisecond precision and a `Z` suffix.
pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_uuid(value: &str, field: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DomainError::internal(format!("Invalid {field} id: {e}")))
}
