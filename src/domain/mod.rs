pub mod errors;
pub mod news;
pub mod upload;
pub mod user;
