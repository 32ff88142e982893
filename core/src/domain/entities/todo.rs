//! Todo entity and its creation shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: Uuid,

    /// Short task title
    pub title: String,

    /// Longer free-form description; may be empty
    pub description: String,

    /// Whether the task has been completed
    pub is_completed: bool,

    /// Identifier of the owning user
    pub user_id: Uuid,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Timestamp when the todo was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the todo was last updated
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// A pending todo whose due date has passed is overdue
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => !self.is_completed && due < now,
            None => false,
        }
    }

    /// Whether the due date falls on the given calendar day (UTC)
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date
            .map(|due| due.date_naive() == date)
            .unwrap_or(false)
    }
}

/// Creation shape for a todo: everything the caller supplies, without the
/// identifier and timestamps the backend assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub user_id: Uuid,
    pub due_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_todo(due_date: Option<DateTime<Utc>>, is_completed: bool) -> Todo {
        Todo {
            id: Uuid::nil(),
            title: "Buy milk".to_string(),
            description: String::new(),
            is_completed,
            user_id: Uuid::nil(),
            due_date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overdue_pending_todo() {
        let now = Utc::now();
        let todo = sample_todo(Some(now - Duration::hours(1)), false);
        assert!(todo.is_overdue(now));
    }

    #[test]
    fn test_completed_todo_is_never_overdue() {
        let now = Utc::now();
        let todo = sample_todo(Some(now - Duration::hours(1)), true);
        assert!(!todo.is_overdue(now));
    }

    #[test]
    fn test_todo_without_due_date_is_never_overdue() {
        let now = Utc::now();
        assert!(!sample_todo(None, false).is_overdue(now));
    }

    #[test]
    fn test_is_due_on_matches_calendar_day() {
        let due = "2026-03-14T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let todo = sample_todo(Some(due), false);
        assert!(todo.is_due_on(due.date_naive()));
        assert!(!todo.is_due_on(due.date_naive().succ_opt().unwrap()));
    }
}
