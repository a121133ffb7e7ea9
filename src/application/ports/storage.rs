// src/application/ports/storage.rs
use crate::{application::ApplicationResult, domain::upload::StoredFileName};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Handle to bytes written under a staging name but not yet visible under
/// their final stored name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: StoredFileName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFileEntry {
    pub name: StoredFileName,
    pub modified_at: DateTime<Utc>,
    /// `true` for leftovers in the staging area.
    pub staged: bool,
}

/// Byte-level image storage. Every operation is awaited and reports
/// failures as `ApplicationError::Storage`.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn stage(&self, name: &StoredFileName, bytes: Bytes) -> ApplicationResult<StagedFile>;
    async fn commit(&self, staged: &StagedFile) -> ApplicationResult<()>;
    async fn discard(&self, staged: &StagedFile) -> ApplicationResult<()>;
    /// Removing a file that does not exist is not an error.
    async fn remove(&self, name: &StoredFileName) -> ApplicationResult<()>;
    async fn list(&self) -> ApplicationResult<Vec<StoredFileEntry>>;
}
