use satfetch_engine::{DatasetError, FetchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Download error: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0} not found in environment variables")]
    MissingApiKey(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Initialization failed: {0}")]
    Initialization(String),
}
