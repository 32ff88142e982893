//! Pure filtering and sorting helpers for todo lists.
//!
//! These operate on slices and return fresh vectors; callers pass the
//! reference time explicitly so the helpers stay deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::Todo;

/// Todos matching the given completion status
pub fn by_status(todos: &[Todo], is_completed: bool) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.is_completed == is_completed)
        .cloned()
        .collect()
}

/// Todos due on the given calendar day
pub fn by_due_date(todos: &[Todo], date: NaiveDate) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.is_due_on(date))
        .cloned()
        .collect()
}

/// Pending todos whose due date has already passed
pub fn overdue(todos: &[Todo], now: DateTime<Utc>) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.is_overdue(now))
        .cloned()
        .collect()
}

/// Pending todos due on the given day (typically "today")
pub fn due_on_day(todos: &[Todo], day: NaiveDate) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| !todo.is_completed && todo.is_due_on(day))
        .cloned()
        .collect()
}

/// Todos ordered by creation time; newest first by default
pub fn sort_by_created_date(todos: &[Todo], ascending: bool) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| todo.created_at);
    if !ascending {
        sorted.reverse();
    }
    sorted
}

/// Todos ordered by due date; todos without a due date sort last
pub fn sort_by_due_date(todos: &[Todo], ascending: bool) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by(|a, b| match (a.due_date, b.due_date) {
        (None, None) => std::cmp::Ordering::Equal,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (Some(_), None) => std::cmp::Ordering::Less,
        (Some(left), Some(right)) => {
            if ascending {
                left.cmp(&right)
            } else {
                right.cmp(&left)
            }
        }
    });
    sorted
}
