use super::NewsQueryService;
use crate::application::{
    dto::{NewsPage, PageRequest},
    error::ApplicationResult,
};

/// Raw pagination input exactly as it arrived in the query string.
#[derive(Debug, Clone, Default)]
pub struct ListNewsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl NewsQueryService {
    pub async fn list_news(&self, query: ListNewsQuery) -> ApplicationResult<NewsPage> {
        let request = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());

        let total = self.read_repo.count().await?;
        let records = self
            .read_repo
            .list_page(request.skip(), request.limit())
            .await?;

        let items = records
            .into_iter()
            .map(|record| self.transformer.transform(record))
            .collect();

        Ok(NewsPage {
            items,
            metadata: request.metadata(total),
        })
    }
}
