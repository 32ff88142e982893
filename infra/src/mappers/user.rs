//! User DTO <-> entity mapping.

use taskly_core::domain::entities::User;
use taskly_core::errors::DomainResult;

use crate::dto::UserDto;

use super::{format_timestamp, parse_timestamp, parse_uuid};

pub fn to_domain(dto: UserDto) -> DomainResult<User> {
    Ok(User {
        id: parse_uuid(&dto.id, "user")?,
        email: dto.email,
        first_name: dto.first_name,
        last_name: dto.last_name,
        is_email_verified: dto.is_email_verified,
        created_at: parse_timestamp(&dto.created_at, "createdAt")?,
        updated_at: parse_timestamp(&dto.updated_at, "updatedAt")?,
    })
}

pub fn to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id.to_string(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        is_email_verified: user.is_email_verified,
        created_at: format_timestamp(user.created_at),
        updated_at: format_timestamp(user.updated_at),
    }
}
