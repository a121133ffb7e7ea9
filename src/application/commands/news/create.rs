use super::NewsCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsDto},
        error::ApplicationResult,
    },
    domain::{
        news::{NewNews, NewsDraft, NewsWithOwner},
        upload::{UploadError, UploadedFile},
    },
};

pub struct CreateNewsCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<UploadedFile>,
}

impl NewsCommandService {
    pub async fn create_news(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNewsCommand,
    ) -> ApplicationResult<NewsDto> {
        let CreateNewsCommand {
            title,
            content,
            image,
        } = command;

        let draft = NewsDraft::validate(title, content)?;
        let image = image.ok_or(UploadError::Missing)?;
        self.policy.validate(image.size, &image.mime_type)?;

        let stored = self.store_image(&image).await?;

        let now = self.clock.now();
        let new_news = NewNews {
            title: draft.title,
            content: draft.content,
            image: stored.clone(),
            owner_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = match self.write_repo.insert(new_news).await {
            Ok(news) => news,
            Err(err) => {
                self.remove_unreferenced(&stored).await;
                return Err(err.into());
            }
        };

        tracing::info!(news_id = %created.id, owner_id = %actor.id, image = %stored, "news created");

        Ok(self.transformer.transform(NewsWithOwner {
            news: created,
            owner: actor.owner_projection(),
        }))
    }
}
