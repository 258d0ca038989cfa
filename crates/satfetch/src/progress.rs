use std::path::PathBuf;
use std::sync::Arc;

/// An enum to represent different progress events.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A record's image was already cached; no request was made.
    RecordSkipped {
        /// The record id.
        id: String,
        /// The path of the existing image file.
        path: PathBuf,
    },
    /// A record's image was downloaded and persisted.
    RecordDownloaded {
        /// The record id.
        id: String,
        /// The path the image was written to.
        path: PathBuf,
        /// The size of the written image in bytes.
        bytes: u64,
    },
    /// A record's download failed; no file was written.
    RecordFailed {
        /// The record id.
        id: String,
        /// Human-readable failure cause (HTTP status or transport error).
        reason: String,
    },
}

/// A callback function for progress updates.
pub type OnProgress = Arc<dyn Fn(ProgressEvent) + Send + Sync>;
