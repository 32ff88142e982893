//! Todo DTO <-> entity mapping.

use taskly_core::domain::entities::Todo;
use taskly_core::errors::DomainResult;

use crate::dto::TodoDto;

use super::{format_timestamp, parse_timestamp, parse_uuid};

pub fn to_domain(dto: TodoDto) -> DomainResult<Todo> {
    let due_date = match dto.due_date {
        Some(value) => Some(parse_timestamp(&value, "dueDate")?),
        None => None,
    };

    Ok(Todo {
        id: parse_uuid(&dto.id, "todo")?,
        title: dto.title,
        description: dto.description,
        is_completed: dto.is_completed,
        user_id: parse_uuid(&dto.user_id, "user")?,
        due_date,
        created_at: parse_timestamp(&dto.created_at, "createdAt")?,
        updated_at: parse_timestamp(&dto.updated_at, "updatedAt")?,
    })
}

pub fn to_domain_list(dtos: Vec<TodoDto>) -> DomainResult<Vec<Todo>> {
    dtos.into_iter().map(to_domain).collect()
}

pub fn to_dto(todo: &Todo) -> TodoDto {
    TodoDto {
        id: todo.id.to_string(),
        title: todo.title.clone(),
        description: todo.description.clone(),
        is_completed: todo.is_completed,
        user_id: todo.user_id.to_string(),
        due_date: todo.due_date.map(format_timestamp),
        created_at: format_timestamp(todo.created_at),
        updated_at: format_timestamp(todo.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> TodoDto {
        TodoDto {
            id: "1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed".to_string(),
            title: "Buy milk".to_string(),
            description: "2 litres".to_string(),
            is_completed: false,
            user_id: "9f3b2c6a-1f4e-4d2b-8a6f-0c1d2e3f4a5b".to_string(),
            due_date: Some("2026-04-01T00:00:00.000Z".to_string()),
            created_at: "2026-03-01T12:00:00.000Z".to_string(),
            updated_at: "2026-03-01T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dto = sample_dto();
        let todo = to_domain(dto.clone()).unwrap();
        assert_eq!(to_dto(&todo), dto);
    }

    #[test]
    fn test_missing_due_date_stays_none() {
        let mut dto = sample_dto();
        dto.due_date = None;
        let todo = to_domain(dto).unwrap();
        assert_eq!(todo.due_date, None);
    }

    #[test]
    fn test_list_mapping_fails_on_first_bad_record() {
        let mut bad = sample_dto();
        bad.created_at = "nope".to_string();
        assert!(to_domain_list(vec![sample_dto(), bad]).is_err());
    }
}
