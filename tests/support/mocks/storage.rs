// tests/support/mocks/storage.rs
use super::time::fixed_now;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use news_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{FileStore, StagedFile, StoredFileEntry},
};
use news_core::domain::upload::StoredFileName;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

type Entries = BTreeMap<String, (Bytes, DateTime<Utc>)>;

/// 呼び出しを記録するメモリ上のファイルストア
#[derive(Default)]
pub struct RecordingFileStore {
    files: Mutex<Entries>,
    staged: Mutex<Entries>,
    writes: AtomicUsize,
    removals: Mutex<Vec<String>>,
    fail_stage: AtomicBool,
    fail_commit: AtomicBool,
    fail_remove: AtomicBool,
}

impl RecordingFileStore {
    pub fn put(&self, name: &str, modified_at: DateTime<Utc>) {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), (Bytes::from_static(b"img"), modified_at));
    }

    pub fn put_staged(&self, name: &str, modified_at: DateTime<Utc>) {
        self.staged
            .lock()
            .unwrap()
            .insert(name.to_string(), (Bytes::from_static(b"img"), modified_at));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn staged_names(&self) -> Vec<String> {
        self.staged.lock().unwrap().keys().cloned().collect()
    }

    pub fn bytes_of(&self, name: &str) -> Option<Bytes> {
        self.files.lock().unwrap().get(name).map(|(b, _)| b.clone())
    }

    /// `stage` が呼ばれた回数
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn removed(&self) -> Vec<String> {
        self.removals.lock().unwrap().clone()
    }

    /// 書き込み途中で失敗し、不完全なステージングファイルを残す
    pub fn fail_stage(&self, fail: bool) {
        self.fail_stage.store(fail, Ordering::SeqCst);
    }

    pub fn fail_commit(&self, fail: bool) {
        self.fail_commit.store(fail, Ordering::SeqCst);
    }

    pub fn fail_remove(&self, fail: bool) {
        self.fail_remove.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn stage(&self, name: &StoredFileName, bytes: Bytes) -> ApplicationResult<StagedFile> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_stage.load(Ordering::SeqCst) {
            let partial = bytes.slice(..bytes.len() / 2);
            self.staged
                .lock()
                .unwrap()
                .insert(name.as_str().to_string(), (partial, fixed_now()));
            return Err(ApplicationError::storage("disk full"));
        }
        self.staged
            .lock()
            .unwrap()
            .insert(name.as_str().to_string(), (bytes, fixed_now()));
        Ok(StagedFile { name: name.clone() })
    }

    async fn commit(&self, staged: &StagedFile) -> ApplicationResult<()> {
        if self.fail_commit.load(Ordering::SeqCst) {
            return Err(ApplicationError::storage("rename failed"));
        }
        let entry = self
            .staged
            .lock()
            .unwrap()
            .remove(staged.name.as_str())
            .ok_or_else(|| ApplicationError::storage("nothing staged"))?;
        self.files
            .lock()
            .unwrap()
            .insert(staged.name.as_str().to_string(), entry);
        Ok(())
    }

    async fn discard(&self, staged: &StagedFile) -> ApplicationResult<()> {
        self.staged.lock().unwrap().remove(staged.name.as_str());
        Ok(())
    }

    async fn remove(&self, name: &StoredFileName) -> ApplicationResult<()> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(ApplicationError::storage("permission denied"));
        }
        self.files.lock().unwrap().remove(name.as_str());
        self.removals.lock().unwrap().push(name.as_str().to_string());
        Ok(())
    }

    async fn list(&self) -> ApplicationResult<Vec<StoredFileEntry>> {
        let mut entries = Vec::new();
        for (staged, map) in [(false, &self.files), (true, &self.staged)] {
            for (name, (_, modified_at)) in map.lock().unwrap().iter() {
                entries.push(StoredFileEntry {
                    name: StoredFileName::new(name.clone())?,
                    modified_at: *modified_at,
                    staged,
                });
            }
        }
        Ok(entries)
    }
}
