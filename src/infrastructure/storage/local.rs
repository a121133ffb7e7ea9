// src/infrastructure/storage/local.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{FileStore, StagedFile, StoredFileEntry},
};
use crate::domain::upload::StoredFileName;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Stores images as flat files under `root`. Fresh uploads are written to
/// `staging` and renamed into `root` on commit, so a file only becomes
/// visible under its final name once it is complete. `staging` must live
/// outside `root` (and on the same filesystem) since `root` is served as is.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
    staging: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, staging: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            staging: staging.into(),
        }
    }

    /// Creates the image and staging directories if they are missing.
    pub async fn ensure_dirs(&self) -> ApplicationResult<()> {
        for dir in [&self.root, &self.staging] {
            fs::create_dir_all(dir)
                .await
                .map_err(|err| storage_error("create directory", dir, &err))?;
        }
        Ok(())
    }

    fn final_path(&self, name: &StoredFileName) -> PathBuf {
        self.root.join(name.as_str())
    }

    fn staged_path(&self, name: &StoredFileName) -> PathBuf {
        self.staging.join(name.as_str())
    }

    async fn entries_in(&self, dir: &Path, staged: bool) -> ApplicationResult<Vec<StoredFileEntry>> {
        let mut reader = match fs::read_dir(dir).await {
            Ok(reader) => reader,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(storage_error("read directory", dir, &err)),
        };

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|err| storage_error("read directory", dir, &err))?
        {
            let metadata = entry
                .metadata()
                .await
                .map_err(|err| storage_error("stat", &entry.path(), &err))?;
            if !metadata.is_file() {
                continue;
            }
            let Some(name) = entry
                .file_name()
                .to_str()
                .and_then(|raw| StoredFileName::new(raw).ok())
            else {
                continue;
            };
            let modified_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .map_err(|err| storage_error("stat", &entry.path(), &err))?;
            entries.push(StoredFileEntry {
                name,
                modified_at,
                staged,
            });
        }
        Ok(entries)
    }
}

fn storage_error(action: &str, path: &Path, err: &std::io::Error) -> ApplicationError {
    ApplicationError::storage(format!("{action} {}: {err}", path.display()))
}

async fn remove_if_present(path: &Path) -> ApplicationResult<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(storage_error("remove", path, &err)),
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn stage(&self, name: &StoredFileName, bytes: Bytes) -> ApplicationResult<StagedFile> {
        self.ensure_dirs().await?;
        let path = self.staged_path(name);
        fs::write(&path, &bytes)
            .await
            .map_err(|err| storage_error("write", &path, &err))?;
        Ok(StagedFile { name: name.clone() })
    }

    async fn commit(&self, staged: &StagedFile) -> ApplicationResult<()> {
        let from = self.staged_path(&staged.name);
        let to = self.final_path(&staged.name);
        fs::rename(&from, &to)
            .await
            .map_err(|err| storage_error("rename", &from, &err))
    }

    async fn discard(&self, staged: &StagedFile) -> ApplicationResult<()> {
        remove_if_present(&self.staged_path(&staged.name)).await
    }

    async fn remove(&self, name: &StoredFileName) -> ApplicationResult<()> {
        remove_if_present(&self.final_path(name)).await
    }

    async fn list(&self) -> ApplicationResult<Vec<StoredFileEntry>> {
        let mut entries = self.entries_in(&self.root, false).await?;
        entries.extend(self.entries_in(&self.staging, true).await?);
        Ok(entries)
    }
}
