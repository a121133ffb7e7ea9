use super::{NEWS_NOT_FOUND, NOT_OWNER, NewsCommandService};
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        news::{NewsDraft, NewsId, NewsUpdate, NewsWithOwner, specifications::CanUpdateNewsSpec},
        upload::{StoredFileName, UploadedFile},
    },
};

pub struct UpdateNewsCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<UploadedFile>,
}

impl NewsCommandService {
    /// Resolves the news item and confirms `actor` owns it. Runs before the
    /// request body is read so that non-owners never get their upload parsed.
    pub async fn authorize_update(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<NewsWithOwner> {
        let id = NewsId::new(id).map_err(|_| ApplicationError::not_found(NEWS_NOT_FOUND))?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(NEWS_NOT_FOUND))?;

        if !CanUpdateNewsSpec::new(&existing.news, actor.id).is_satisfied() {
            tracing::warn!(news_id = %id, actor_id = %actor.id, "rejected update from non-owner");
            return Err(ApplicationError::forbidden(NOT_OWNER));
        }

        Ok(existing)
    }

    pub async fn update_news(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateNewsCommand,
    ) -> ApplicationResult<NewsDto> {
        let UpdateNewsCommand {
            id,
            title,
            content,
            image,
        } = command;

        let existing = self.authorize_update(actor, id).await?;
        let id = existing.news.id;

        let draft = NewsDraft::validate(title, content)?;

        let replacement = match image {
            Some(image) => {
                self.policy.validate(image.size, &image.mime_type)?;
                Some(self.store_image(&image).await?)
            }
            None => None,
        };

        let mut update = NewsUpdate::new(id, draft.title, draft.content, self.clock.now());
        if let Some(name) = &replacement {
            update = update.with_image(name.clone());
        }

        let updated = match self.write_repo.update(update).await {
            Ok(news) => news,
            Err(err) => {
                if let Some(name) = &replacement {
                    self.remove_unreferenced(name).await;
                }
                return Err(err.into());
            }
        };

        if let Some(name) = &replacement {
            self.drop_previous_image(&existing.news.image, name).await;
        }

        tracing::info!(news_id = %updated.id, actor_id = %actor.id, "news updated");

        Ok(self.transformer.transform(NewsWithOwner {
            news: updated,
            owner: existing.owner,
        }))
    }

    async fn drop_previous_image(&self, previous: &StoredFileName, current: &StoredFileName) {
        if previous != current {
            self.remove_superseded(previous).await;
        }
    }
}
