use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{config::FetcherConfig, error::FetchError, request::image_url};

/// Create a reqwest Client with the provided configuration
pub fn create_client(config: &FetcherConfig) -> Result<Client, FetchError> {
    let mut client_builder = Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(config.headers.clone());

    if !config.timeout.is_zero() {
        client_builder = client_builder.timeout(config.timeout);
    }

    if !config.connect_timeout.is_zero() {
        client_builder = client_builder.connect_timeout(config.connect_timeout);
    }

    client_builder.build().map_err(FetchError::from)
}

/// Fetches single static-map images from the imagery endpoint.
///
/// The API credential is injected once at construction; the fetcher never
/// reads the process environment.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
    config: FetcherConfig,
    api_key: String,
}

impl ImageFetcher {
    /// Create a fetcher with a client built from `config`.
    pub fn new(config: FetcherConfig, api_key: impl Into<String>) -> Result<Self, FetchError> {
        let client = create_client(&config)?;
        Ok(Self::with_client(client, config, api_key))
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client, config: FetcherConfig, api_key: impl Into<String>) -> Self {
        Self {
            client,
            config,
            api_key: api_key.into(),
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch the image centered on `(lat, lon)`.
    ///
    /// Returns the response body only for HTTP 200. Any other status maps to
    /// [`FetchError::Status`]; connection, timeout and body-read failures map
    /// to [`FetchError::Transport`].
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<Bytes, FetchError> {
        let url = image_url(&self.config, &self.api_key, lat, lon)?;
        debug!(%lat, %lon, "requesting static-map image");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(bytes)
    }
}
