use std::fmt::Display;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Map rendering style requested from the imagery endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapType {
    #[default]
    Satellite,
    Roadmap,
    Terrain,
    Hybrid,
}

impl MapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Satellite => "satellite",
            MapType::Roadmap => "roadmap",
            MapType::Terrain => "terrain",
            MapType::Hybrid => "hybrid",
        }
    }
}

/// Configurable options for the image fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Base URL of the static-map imagery endpoint
    pub endpoint: String,

    /// Map zoom level
    pub zoom: u8,

    /// Output image width in pixels
    pub width: u32,

    /// Output image height in pixels
    pub height: u32,

    /// Map rendering style
    pub map_type: MapType,

    /// Pixel density multiplier
    pub scale: u8,

    /// Overall timeout for each HTTP request
    pub timeout: Duration,

    /// Connection timeout (time to establish initial connection)
    pub connect_timeout: Duration,

    /// Pause between consecutive requests, to respect API rate limits
    pub request_delay: Duration,

    /// User agent string
    pub user_agent: String,

    /// Custom HTTP headers for requests
    pub headers: HeaderMap,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            zoom: 19,
            width: 256,
            height: 256,
            map_type: MapType::default(),
            scale: 1,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            request_delay: Duration::from_millis(150),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: FetcherConfig::get_default_headers(),
        }
    }
}

impl Display for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FetcherConfig {{ endpoint: {}, zoom: {}, size: {}x{}, maptype: {}, scale: {}, timeout: {:.1}s, delay: {}ms }}",
            self.endpoint,
            self.zoom,
            self.width,
            self.height,
            self.map_type.as_str(),
            self.scale,
            self.timeout.as_secs_f64(),
            self.request_delay.as_millis()
        )
    }
}

impl FetcherConfig {
    pub fn builder() -> crate::builder::FetcherConfigBuilder {
        crate::builder::FetcherConfigBuilder::new()
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut default_headers = HeaderMap::new();

        default_headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("image/png,image/*;q=0.8,*/*;q=0.5"),
        );

        default_headers.insert(
            reqwest::header::CONNECTION,
            HeaderValue::from_static("keep-alive"),
        );

        default_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_imagery_api_constants() {
        let config = FetcherConfig::default();
        assert_eq!(config.zoom, 19);
        assert_eq!((config.width, config.height), (256, 256));
        assert_eq!(config.map_type, MapType::Satellite);
        assert_eq!(config.scale, 1);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.request_delay, Duration::from_millis(150));
    }

    #[test]
    fn display_never_contains_a_credential() {
        // The API key is not part of the config.
        let rendered = FetcherConfig::default().to_string();
        assert!(rendered.contains("zoom: 19"));
        assert!(rendered.contains("size: 256x256"));
        assert!(!rendered.contains("key"));
    }
}
