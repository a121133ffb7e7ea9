// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserEmail, UserId, UserName};

/// Read-only view of a user account. Accounts are managed elsewhere; this
/// crate only resolves principals and attaches owners to news records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: UserEmail,
    pub image: Option<String>,
}
