use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::util::TokenGenerator,
    },
    domain::upload::{StoredFileName, UploadedFile, extension_for},
};
use std::sync::Arc;

/// Derives stored file names from a random token and the upload's extension.
/// Uniqueness rests on token entropy; existing files are not consulted.
#[derive(Clone)]
pub struct FileNamer {
    tokens: Arc<dyn TokenGenerator>,
}

impl FileNamer {
    pub fn new(tokens: Arc<dyn TokenGenerator>) -> Self {
        Self { tokens }
    }

    pub fn name_for(&self, file: &UploadedFile) -> ApplicationResult<StoredFileName> {
        let extension = extension_for(&file.original_name, &file.mime_type);
        StoredFileName::compose(&self.tokens.generate(), &extension).map_err(|err| {
            ApplicationError::storage(format!("generated file name was rejected: {err}"))
        })
    }
}
