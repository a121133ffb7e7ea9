// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            images::ImageJanitor,
            news::{FileNamer, NewsCommandService},
        },
        dto::{AuthenticatedUser, NewsTransformer},
        error::ApplicationError,
        ports::{
            security::TokenVerifier, storage::FileStore, time::Clock, util::TokenGenerator,
        },
        queries::news::NewsQueryService,
    },
    domain::{
        news::{NewsReadRepository, NewsWriteRepository},
        upload::UploadPolicy,
        user::UserRepository,
    },
};

/// Settings the services need beyond their collaborators.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub upload_policy: UploadPolicy,
    pub public_base_url: String,
    pub orphan_grace: Duration,
}

pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
    pub image_janitor: Arc<ImageJanitor>,
    user_repo: Arc<dyn UserRepository>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        news_write_repo: Arc<dyn NewsWriteRepository>,
        news_read_repo: Arc<dyn NewsReadRepository>,
        file_store: Arc<dyn FileStore>,
        token_verifier: Arc<dyn TokenVerifier>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
        settings: ServiceSettings,
    ) -> Self {
        let transformer = Arc::new(NewsTransformer::new(&settings.public_base_url));

        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&news_write_repo),
            Arc::clone(&news_read_repo),
            Arc::clone(&file_store),
            FileNamer::new(tokens),
            settings.upload_policy,
            Arc::clone(&transformer),
            Arc::clone(&clock),
        ));

        let news_queries = Arc::new(NewsQueryService::new(
            Arc::clone(&news_read_repo),
            Arc::clone(&transformer),
        ));

        let image_janitor = Arc::new(ImageJanitor::new(
            Arc::clone(&news_read_repo),
            Arc::clone(&file_store),
            Arc::clone(&clock),
            settings.orphan_grace,
        ));

        Self {
            news_commands,
            news_queries,
            image_janitor,
            user_repo,
            token_verifier,
        }
    }

    /// Resolve a raw bearer token to the principal it belongs to. Tokens for
    /// accounts that no longer exist are rejected like invalid ones.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self.token_verifier.verify(token).await?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        Ok(user.into())
    }
}
