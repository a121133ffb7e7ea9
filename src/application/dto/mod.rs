pub mod auth;
pub mod news;
pub mod pagination;

pub use auth::AuthenticatedUser;
pub use news::{NewsDto, NewsTransformer, ReporterDto};
pub use pagination::{NewsPage, PageRequest, PageWindow, PaginationMetadata};
