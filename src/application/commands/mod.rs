pub mod images;
pub mod news;
