use super::NewsQueryService;
use crate::{
    application::{
        commands::news::NEWS_NOT_FOUND,
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsId,
};

pub struct GetNewsByIdQuery {
    pub id: i64,
}

impl NewsQueryService {
    pub async fn get_news_by_id(&self, query: GetNewsByIdQuery) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(query.id).map_err(|_| ApplicationError::not_found(NEWS_NOT_FOUND))?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(NEWS_NOT_FOUND))?;
        Ok(self.transformer.transform(record))
    }
}
