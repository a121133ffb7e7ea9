use crate::domain::news::{NewsWithOwner, OwnerProjection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReporterDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Public URL of the reporter's picture, if they have one.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i64,
    pub heading: String,
    pub news: String,
    /// Public URL of the news image.
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reporter: ReporterDto,
}

/// Maps stored records to their public shape, turning stored file names into
/// URLs under the public images path.
#[derive(Debug, Clone)]
pub struct NewsTransformer {
    images_base_url: String,
}

impl NewsTransformer {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            images_base_url: format!("{}/images", public_base_url.trim_end_matches('/')),
        }
    }

    pub fn transform(&self, record: NewsWithOwner) -> NewsDto {
        let NewsWithOwner { news, owner } = record;
        NewsDto {
            id: news.id.into(),
            heading: news.title.into_inner(),
            news: news.content.into_inner(),
            image: self.image_url(news.image.as_str()),
            created_at: news.created_at,
            updated_at: news.updated_at,
            reporter: self.reporter(owner),
        }
    }

    pub fn image_url(&self, stored_name: &str) -> String {
        format!("{}/{stored_name}", self.images_base_url)
    }

    fn reporter(&self, owner: OwnerProjection) -> ReporterDto {
        ReporterDto {
            id: owner.id.into(),
            name: owner.name.into_inner(),
            email: owner.email.into_inner(),
            image: owner
                .image
                .filter(|name| !name.trim().is_empty())
                .map(|name| self.image_url(&name)),
        }
    }
}
