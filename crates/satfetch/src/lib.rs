//! # Satfetch
//!
//! A library for batch-downloading static satellite map images for
//! geocoded records and caching them on disk, one image file per record.
//!
//! ## Features
//!
//! - Typed CSV dataset loading with up-front column validation
//! - Idempotent fetch-and-cache loop (existing files are never re-fetched)
//! - Per-record failure accounting with a run summary
//! - Progress event callbacks for UI integration

pub mod batch;
pub mod builder;
pub mod config;
pub mod dataset;
pub mod downloader;
pub mod error;
pub mod progress;
pub mod request;
pub mod summary;

pub use batch::BatchFetcher;
pub use builder::FetcherConfigBuilder;
pub use config::{FetcherConfig, MapType};
pub use dataset::{DatasetError, Record, load_records};
pub use downloader::{ImageFetcher, create_client};
pub use error::FetchError;
pub use progress::{OnProgress, ProgressEvent};
pub use request::image_url;
pub use summary::RunSummary;
