//! # Builder for FetcherConfig
//!
//! This module provides a builder pattern implementation for creating and
//! customizing FetcherConfig instances with a fluent API.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use satfetch_engine::{FetcherConfig, MapType};
//!
//! let config = FetcherConfig::builder()
//!     .with_zoom(17)
//!     .with_size(512, 512)
//!     .with_map_type(MapType::Hybrid)
//!     .with_timeout(Duration::from_secs(30))
//!     .with_request_delay(Duration::from_millis(200))
//!     .build();
//! ```

use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::config::{FetcherConfig, MapType};

/// Builder for creating FetcherConfig instances with a fluent API
#[derive(Debug, Clone)]
pub struct FetcherConfigBuilder {
    /// Internal config being built
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: FetcherConfig::default(),
        }
    }

    /// Set the base URL of the imagery endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the map zoom level
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.config.zoom = zoom;
        self
    }

    /// Set the output image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set the map rendering style
    pub fn with_map_type(mut self, map_type: MapType) -> Self {
        self.config.map_type = map_type;
        self
    }

    /// Set the pixel density multiplier
    pub fn with_scale(mut self, scale: u8) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set the overall timeout for each HTTP request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout (time to establish initial connection)
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the pause between consecutive requests
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.config.request_delay = delay;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a custom HTTP header
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.as_ref().parse::<reqwest::header::HeaderName>(),
            HeaderValue::from_str(value.as_ref()),
        ) {
            self.config.headers.insert(name, value);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}

impl Default for FetcherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = FetcherConfig::builder()
            .with_endpoint("http://localhost:1234/staticmap")
            .with_zoom(15)
            .with_size(640, 480)
            .with_map_type(MapType::Roadmap)
            .with_request_delay(Duration::ZERO)
            .build();

        assert_eq!(config.endpoint, "http://localhost:1234/staticmap");
        assert_eq!(config.zoom, 15);
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.map_type, MapType::Roadmap);
        assert!(config.request_delay.is_zero());
        // Untouched fields keep their defaults
        assert_eq!(config.scale, 1);
    }

    #[test]
    fn with_header_ignores_invalid_names() {
        let before = FetcherConfig::default().headers.len();
        let config = FetcherConfig::builder()
            .with_header("not a header name", "value")
            .build();
        assert_eq!(config.headers.len(), before);
    }
}
