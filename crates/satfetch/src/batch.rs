//! The idempotent fetch-and-cache loop.
//!
//! Records are processed strictly in dataset order, one request in flight at
//! a time. A record whose image file already exists is skipped without a
//! network call; a failed request is counted and logged, never retried
//! within the run. Re-running the loop later re-attempts only records whose
//! file is still absent.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    dataset::Record,
    downloader::ImageFetcher,
    error::FetchError,
    progress::{OnProgress, ProgressEvent},
    summary::RunSummary,
};

/// Drives [`ImageFetcher`] over a whole dataset, caching one image file per
/// record under the destination directory.
pub struct BatchFetcher {
    fetcher: ImageFetcher,
    image_dir: PathBuf,
    request_delay: Duration,
    on_progress: Option<OnProgress>,
}

impl BatchFetcher {
    /// Create a batch fetcher writing into `image_dir`.
    ///
    /// The inter-request delay is taken from the fetcher's configuration.
    pub fn new(fetcher: ImageFetcher, image_dir: impl Into<PathBuf>) -> Self {
        let request_delay = fetcher.config().request_delay;
        Self {
            fetcher,
            image_dir: image_dir.into(),
            request_delay,
            on_progress: None,
        }
    }

    /// Attach a progress callback invoked once per processed record.
    pub fn with_progress(mut self, on_progress: OnProgress) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(on_progress) = &self.on_progress {
            on_progress(event);
        }
    }

    /// Process every record, returning the run counters.
    ///
    /// The destination directory (and parents) is created if absent. Only
    /// startup and file-write I/O errors abort the run; per-record fetch
    /// failures are counted as `failed` and the loop continues.
    pub async fn run(&self, records: &[Record]) -> Result<RunSummary, FetchError> {
        tokio::fs::create_dir_all(&self.image_dir).await?;

        let mut summary = RunSummary::new(records.len());
        info!(
            total = summary.total,
            image_dir = %self.image_dir.display(),
            "starting satellite image download"
        );

        for record in records {
            let path = self.image_dir.join(format!("{}.png", record.id));

            if path.exists() {
                summary.skipped += 1;
                debug!(id = %record.id, "image already cached, skipping");
                self.emit(ProgressEvent::RecordSkipped {
                    id: record.id.clone(),
                    path,
                });
                continue;
            }

            match self.fetcher.fetch(record.lat, record.lon).await {
                Ok(bytes) => {
                    // Body is fully buffered before the file is created.
                    tokio::fs::write(&path, &bytes).await?;
                    summary.downloaded += 1;
                    debug!(id = %record.id, bytes = bytes.len(), "image downloaded");
                    self.emit(ProgressEvent::RecordDownloaded {
                        id: record.id.clone(),
                        path,
                        bytes: bytes.len() as u64,
                    });
                }
                Err(FetchError::Status(status)) => {
                    summary.failed += 1;
                    warn!(id = %record.id, %status, "download failed with HTTP status");
                    self.emit(ProgressEvent::RecordFailed {
                        id: record.id.clone(),
                        reason: format!("HTTP {status}"),
                    });
                }
                Err(err) => {
                    summary.failed += 1;
                    warn!(id = %record.id, error = %err, "download failed");
                    self.emit(ProgressEvent::RecordFailed {
                        id: record.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }

            // Rate-limit pause after every request, success or failure;
            // skips take no pause.
            if !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        info!(
            downloaded = summary.downloaded,
            skipped = summary.skipped,
            failed = summary.failed,
            "satellite image download finished"
        );
        Ok(summary)
    }
}
