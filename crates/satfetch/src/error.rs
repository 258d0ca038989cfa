use reqwest::StatusCode;

// Custom error type for image fetch operations
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status code {0}")]
    Status(StatusCode),

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
