use std::sync::Arc;

use crate::{
    application::{
        dto::NewsTransformer,
        error::ApplicationResult,
        ports::{
            storage::{FileStore, StagedFile},
            time::Clock,
        },
    },
    domain::{
        news::{NewsReadRepository, NewsWriteRepository},
        upload::{StoredFileName, UploadPolicy, UploadedFile},
    },
};

use super::FileNamer;

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) file_store: Arc<dyn FileStore>,
    pub(super) namer: FileNamer,
    pub(super) policy: UploadPolicy,
    pub(super) transformer: Arc<NewsTransformer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        file_store: Arc<dyn FileStore>,
        namer: FileNamer,
        policy: UploadPolicy,
        transformer: Arc<NewsTransformer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            file_store,
            namer,
            policy,
            transformer,
            clock,
        }
    }

    /// Names the upload and moves its bytes into the images directory. The
    /// staged copy is dropped again if staging or committing fails.
    pub(super) async fn store_image(&self, image: &UploadedFile) -> ApplicationResult<StoredFileName> {
        let name = self.namer.name_for(image)?;
        let staged = match self.file_store.stage(&name, image.bytes.clone()).await {
            Ok(staged) => staged,
            Err(err) => {
                // A failed write may still leave a partial file behind.
                self.discard_staged(&StagedFile { name }).await;
                return Err(err);
            }
        };

        if let Err(err) = self.file_store.commit(&staged).await {
            self.discard_staged(&staged).await;
            return Err(err);
        }

        tracing::debug!(file = %name, size = image.size, "stored image");
        Ok(name)
    }

    /// Compensation for a stored image whose record could not be written.
    pub(super) async fn remove_unreferenced(&self, name: &StoredFileName) {
        if let Err(err) = self.file_store.remove(name).await {
            tracing::warn!(file = %name, error = %err, "failed to remove unreferenced image; sweep will retry");
        } else {
            tracing::warn!(file = %name, "removed image after failed write");
        }
    }

    pub(super) async fn remove_superseded(&self, name: &StoredFileName) {
        match self.file_store.remove(name).await {
            Ok(()) => tracing::debug!(file = %name, "removed superseded image"),
            Err(err) => {
                tracing::warn!(file = %name, error = %err, "failed to remove superseded image; sweep will retry");
            }
        }
    }

    async fn discard_staged(&self, staged: &StagedFile) {
        if let Err(err) = self.file_store.discard(staged).await {
            tracing::warn!(file = %staged.name, error = %err, "failed to discard staged image");
        }
    }
}
