use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// A stored row that no longer satisfies the domain rules is a storage fault,
/// not a client error.
pub fn corrupt_row(err: DomainError) -> DomainError {
    DomainError::Persistence(format!("stored row is invalid: {err}"))
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced user not found".into())
            }
            ErrorKind::UniqueViolation => {
                DomainError::Conflict("unique constraint violated".into())
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation("constraint violated".into())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
