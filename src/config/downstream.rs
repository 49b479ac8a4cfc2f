//! Downstream service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::RestClientConfig;

/// Location and transport settings of the metadata and reviews stores.
#[derive(Debug, Clone, Deserialize)]
pub struct DownstreamConfig {
    /// Metadata collection URL (e.g. `http://localhost:8080/v1/movieinfos`)
    pub metadata_url: String,

    /// Reviews collection URL (e.g. `http://localhost:8081/v1/reviews`)
    pub reviews_url: String,

    /// Per-call timeout in seconds, applied by the HTTP transport
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DownstreamConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client configuration for the metadata store
    pub fn metadata_client(&self) -> RestClientConfig {
        RestClientConfig::new(&self.metadata_url).with_timeout(self.timeout())
    }

    /// Client configuration for the reviews store
    pub fn reviews_client(&self) -> RestClientConfig {
        RestClientConfig::new(&self.reviews_url).with_timeout(self.timeout())
    }

    /// Validate downstream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.metadata_url) {
            return Err(ValidationError::InvalidDownstreamUrl("metadata_url"));
        }
        if !is_http_url(&self.reviews_url) {
            return Err(ValidationError::InvalidDownstreamUrl("reviews_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidDownstreamTimeout);
        }
        Ok(())
    }
}

fn is_http_url(raw: &str) -> bool {
    reqwest::Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

fn default_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> DownstreamConfig {
        DownstreamConfig {
            metadata_url: "http://localhost:8080/v1/movieinfos".to_string(),
            reviews_url: "http://localhost:8081/v1/reviews".to_string(),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn test_timeout_duration() {
        let config = DownstreamConfig {
            timeout_secs: 10,
            ..valid_config()
        };
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_client_configs_share_timeout() {
        let config = valid_config();
        let metadata = config.metadata_client();
        let reviews = config.reviews_client();

        assert_eq!(metadata.base_url, "http://localhost:8080/v1/movieinfos");
        assert_eq!(reviews.base_url, "http://localhost:8081/v1/reviews");
        assert_eq!(metadata.timeout, Duration::from_secs(5));
        assert_eq!(reviews.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_metadata_url() {
        let config = DownstreamConfig {
            metadata_url: "localhost:8080".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDownstreamUrl("metadata_url"))
        ));
    }

    #[test]
    fn test_validation_invalid_reviews_url() {
        let config = DownstreamConfig {
            reviews_url: "ftp://localhost/reviews".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDownstreamUrl("reviews_url"))
        ));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = DownstreamConfig {
            timeout_secs: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());

        let config = DownstreamConfig {
            timeout_secs: 500,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }
}
