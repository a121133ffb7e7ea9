use super::{corrupt_row, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    NewNews, News, NewsContent, NewsId, NewsReadRepository, NewsTitle, NewsUpdate, NewsWithOwner,
    NewsWriteRepository, OwnerProjection,
};
use crate::domain::upload::StoredFileName;
use crate::domain::user::{UserEmail, UserId, UserName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const NEWS_COLUMNS: &str = "id, title, content, image, user_id, created_at, updated_at";

const SELECT_WITH_OWNER: &str = "SELECT n.id, n.title, n.content, n.image, n.user_id, n.created_at, n.updated_at, \
     u.name AS owner_name, u.email AS owner_email, u.image AS owner_image \
     FROM news n JOIN users u ON u.id = n.user_id";

#[derive(Clone)]
pub struct SqliteNewsWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNewsWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteNewsReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNewsReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    content: String,
    image: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct NewsWithOwnerRow {
    #[sqlx(flatten)]
    news: NewsRow,
    owner_name: String,
    owner_email: String,
    owner_image: Option<String>,
}

impl TryFrom<NewsRow> for News {
    type Error = DomainError;

    fn try_from(row: NewsRow) -> Result<Self, Self::Error> {
        Ok(News {
            id: NewsId::new(row.id)?,
            title: NewsTitle::new(row.title)?,
            content: NewsContent::new(row.content)?,
            image: StoredFileName::new(row.image)?,
            owner_id: UserId::new(row.user_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<NewsWithOwnerRow> for NewsWithOwner {
    type Error = DomainError;

    fn try_from(row: NewsWithOwnerRow) -> Result<Self, Self::Error> {
        let news = News::try_from(row.news)?;
        let owner = OwnerProjection {
            id: news.owner_id,
            name: UserName::new(row.owner_name)?,
            email: UserEmail::new(row.owner_email)?,
            image: row.owner_image,
        };
        Ok(NewsWithOwner { news, owner })
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl NewsWriteRepository for SqliteNewsWriteRepository {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        let NewNews {
            title,
            content,
            image,
            owner_id,
            created_at,
            updated_at,
        } = news;

        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "INSERT INTO news (title, content, image, user_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING {NEWS_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(image.as_str())
        .bind(i64::from(owner_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        News::try_from(row).map_err(corrupt_row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        let NewsUpdate {
            id,
            title,
            content,
            image,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "UPDATE news SET title = ?, content = ?, image = COALESCE(?, image), updated_at = ? WHERE id = ? RETURNING {NEWS_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(image.as_ref().map(StoredFileName::as_str))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("news not found".into()))?;

        News::try_from(row).map_err(corrupt_row)
    }
}

#[async_trait]
impl NewsReadRepository for SqliteNewsReadRepository {
    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM news")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn list_page(&self, skip: u64, limit: u64) -> DomainResult<Vec<NewsWithOwner>> {
        let rows = sqlx::query_as::<_, NewsWithOwnerRow>(&format!(
            "{SELECT_WITH_OWNER} ORDER BY n.id DESC LIMIT ? OFFSET ?"
        ))
        .bind(to_i64(limit))
        .bind(to_i64(skip))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| NewsWithOwner::try_from(row).map_err(corrupt_row))
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsWithOwner>> {
        let row = sqlx::query_as::<_, NewsWithOwnerRow>(&format!(
            "{SELECT_WITH_OWNER} WHERE n.id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NewsWithOwner::try_from)
            .transpose()
            .map_err(corrupt_row)
    }

    async fn list_image_names(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT image FROM news")
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)
    }
}
