// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_news;
mod sqlite_user;

pub use error::{corrupt_row, map_sqlx};
pub use sqlite_news::{SqliteNewsReadRepository, SqliteNewsWriteRepository};
pub use sqlite_user::SqliteUserRepository;
