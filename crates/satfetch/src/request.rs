use url::Url;

use crate::{config::FetcherConfig, error::FetchError};

/// Construct the static-map request URL for one record location.
///
/// Query parameter order follows the imagery API convention:
/// `center`, `zoom`, `size`, `maptype`, `scale`, `key`.
pub fn image_url(
    config: &FetcherConfig,
    api_key: &str,
    lat: f64,
    lon: f64,
) -> Result<Url, FetchError> {
    let mut url = Url::parse(&config.endpoint).map_err(|e| FetchError::Url(e.to_string()))?;

    url.query_pairs_mut()
        .append_pair("center", &format!("{lat},{lon}"))
        .append_pair("zoom", &config.zoom.to_string())
        .append_pair("size", &format!("{}x{}", config.width, config.height))
        .append_pair("maptype", config.map_type.as_str())
        .append_pair("scale", &config.scale.to_string())
        .append_pair("key", api_key);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_url_with_all_parameters() {
        let config = FetcherConfig::default();
        let url = image_url(&config, "secret-key", 51.5, -0.12).unwrap();

        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/staticmap\
             ?center=51.5%2C-0.12&zoom=19&size=256x256&maptype=satellite&scale=1&key=secret-key"
        );
    }

    #[test]
    fn integral_coordinates_keep_short_form() {
        let config = FetcherConfig::default();
        let url = image_url(&config, "k", 1.0, 2.0).unwrap();
        let center = url
            .query_pairs()
            .find(|(name, _)| name == "center")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(center, "1,2");
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let config = FetcherConfig::builder().with_endpoint("not a url").build();
        let err = image_url(&config, "k", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, FetchError::Url(_)));
    }
}
