use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNews, News, NewsUpdate, NewsWithOwner};
use crate::domain::news::value_objects::NewsId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, news: NewNews) -> DomainResult<News>;
    /// Fails with `DomainError::NotFound` when no record has the given id.
    async fn update(&self, update: NewsUpdate) -> DomainResult<News>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;
    async fn list_page(&self, skip: u64, limit: u64) -> DomainResult<Vec<NewsWithOwner>>;
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsWithOwner>>;
    /// Every stored image name referenced by a news record.
    async fn list_image_names(&self) -> DomainResult<Vec<String>>;
}
