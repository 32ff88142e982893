//! Payload validation for todo creation and updates.

use chrono::{DateTime, Local, Utc};

use crate::domain::value_objects::{TodoDescription, TodoTitle};
use crate::errors::{DomainError, DomainResult};

/// Validates a todo creation payload.
///
/// Title and description rules come from their value objects. A due date,
/// when supplied, must not fall before today in the caller's local
/// timezone; today itself is accepted.
pub fn validate_create_payload(
    title: &str,
    description: &str,
    due_date: Option<DateTime<Utc>>,
) -> DomainResult<()> {
    TodoTitle::new(title)?;
    TodoDescription::new(description)?;

    if let Some(due) = due_date {
        ensure_not_past(due)?;
    }

    Ok(())
}

/// Validates a todo update payload.
///
/// Partial update semantics: each field is validated only when present.
/// An explicitly empty title still fails the title length rules.
pub fn validate_update_payload(
    title: Option<&str>,
    description: Option<&str>,
    due_date: Option<DateTime<Utc>>,
) -> DomainResult<()> {
    if let Some(title) = title {
        TodoTitle::new(title)?;
    }

    if let Some(description) = description {
        TodoDescription::new(description)?;
    }

    if let Some(due) = due_date {
        ensure_not_past(due)?;
    }

    Ok(())
}

/// Rejects due dates whose local calendar day is before today.
fn ensure_not_past(due: DateTime<Utc>) -> DomainResult<()> {
    let today = Local::now().date_naive();
    if due.with_timezone(&Local).date_naive() < today {
        return Err(DomainError::validation(
            "Due date cannot be in the past",
            "dueDate",
        ));
    }
    Ok(())
}
