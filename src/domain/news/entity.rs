// src/domain/news/entity.rs
use crate::domain::news::value_objects::{NewsContent, NewsId, NewsTitle};
use crate::domain::upload::StoredFileName;
use crate::domain::user::{UserEmail, UserId, UserName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id: NewsId,
    pub title: NewsTitle,
    pub content: NewsContent,
    pub image: StoredFileName,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public subset of the owning user that travels with a news record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProjection {
    pub id: UserId,
    pub name: UserName,
    pub email: UserEmail,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsWithOwner {
    pub news: News,
    pub owner: OwnerProjection,
}

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: NewsTitle,
    pub content: NewsContent,
    pub image: StoredFileName,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub id: NewsId,
    pub title: NewsTitle,
    pub content: NewsContent,
    pub image: Option<StoredFileName>,
    pub updated_at: DateTime<Utc>,
}

impl NewsUpdate {
    pub fn new(
        id: NewsId,
        title: NewsTitle,
        content: NewsContent,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image: None,
            updated_at,
        }
    }

    pub fn with_image(mut self, image: StoredFileName) -> Self {
        self.image = Some(image);
        self
    }
}
