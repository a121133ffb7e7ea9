pub mod entity;
pub mod repository;
pub mod schema;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewNews, News, NewsUpdate, NewsWithOwner, OwnerProjection};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use schema::NewsDraft;
pub use value_objects::{NewsContent, NewsId, NewsTitle};
