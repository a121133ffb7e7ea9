mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetNewsByIdQuery;
pub use list::ListNewsQuery;
pub use service::NewsQueryService;
