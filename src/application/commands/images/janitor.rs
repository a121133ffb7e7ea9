use crate::{
    application::{
        error::ApplicationResult,
        ports::{
            storage::{FileStore, StagedFile},
            time::Clock,
        },
    },
    domain::news::NewsReadRepository,
};
use chrono::Duration;
use std::{collections::HashSet, sync::Arc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub removed: usize,
    pub kept: usize,
    pub failed: usize,
}

/// Reconciles the images directory with the news table. Files no record
/// points to, and staging leftovers, are removed once they are older than
/// the grace period, which covers uploads still between write and insert.
pub struct ImageJanitor {
    read_repo: Arc<dyn NewsReadRepository>,
    file_store: Arc<dyn FileStore>,
    clock: Arc<dyn Clock>,
    grace: Duration,
}

impl ImageJanitor {
    pub fn new(
        read_repo: Arc<dyn NewsReadRepository>,
        file_store: Arc<dyn FileStore>,
        clock: Arc<dyn Clock>,
        grace: Duration,
    ) -> Self {
        Self {
            read_repo,
            file_store,
            clock,
            grace,
        }
    }

    pub async fn sweep(&self) -> ApplicationResult<SweepReport> {
        let referenced: HashSet<String> =
            self.read_repo.list_image_names().await?.into_iter().collect();
        let cutoff = self.clock.now() - self.grace;
        let mut report = SweepReport::default();

        for entry in self.file_store.list().await? {
            let orphaned = entry.staged || !referenced.contains(entry.name.as_str());
            if !orphaned || entry.modified_at > cutoff {
                report.kept += 1;
                continue;
            }

            let result = if entry.staged {
                self.file_store
                    .discard(&StagedFile {
                        name: entry.name.clone(),
                    })
                    .await
            } else {
                self.file_store.remove(&entry.name).await
            };

            match result {
                Ok(()) => {
                    tracing::info!(file = %entry.name, staged = entry.staged, "removed orphaned image");
                    report.removed += 1;
                }
                Err(err) => {
                    tracing::warn!(file = %entry.name, error = %err, "failed to remove orphaned image");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}
