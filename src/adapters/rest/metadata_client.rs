//! REST Metadata Client - `MetadataClient` over the metadata store's HTTP API.
//!
//! # Request
//!
//! `GET {base_url}/{id}`, the id percent-encoded as a single path segment.
//!
//! # Status mapping
//!
//! | Downstream            | Result                                   |
//! |-----------------------|------------------------------------------|
//! | 2xx                   | decoded `MovieMetadata`                  |
//! | 404                   | `MetadataClientError::NotFound(id)`      |
//! | other 4xx             | `MetadataClientError::Client` (verbatim) |
//! | 5xx, other, transport | `MetadataClientError::Server`            |
//!
//! One request per call. No retries, no caching.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::config::{
    body_or_status, build_http_client, describe_body_error, describe_send_error, parse_base_url,
    RestClientConfig, RestClientError,
};
use crate::domain::foundation::MovieId;
use crate::domain::movie::MovieMetadata;
use crate::ports::{MetadataClient, MetadataClientError};

/// Metadata store client backed by `reqwest`.
pub struct RestMetadataClient {
    base_url: Url,
    timeout: Duration,
    client: Client,
}

impl RestMetadataClient {
    /// Creates a new client. Fails if the base URL is not an http(s) URL.
    pub fn new(config: RestClientConfig) -> Result<Self, RestClientError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = build_http_client(config.timeout)?;

        Ok(Self {
            base_url,
            timeout: config.timeout,
            client,
        })
    }

    /// Builds the record URL for one movie.
    fn movie_url(&self, id: &MovieId) -> Result<Url, MetadataClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MetadataClientError::server("Metadata base URL cannot hold a path"))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl MetadataClient for RestMetadataClient {
    #[tracing::instrument(name = "metadata.fetch_by_id", skip(self), fields(movie_id = %id))]
    async fn fetch_by_id(&self, id: &MovieId) -> Result<MovieMetadata, MetadataClientError> {
        let url = self.movie_url(id)?;
        debug!(%url, "Fetching movie metadata");

        let response = self.client.get(url).send().await.map_err(|e| {
            let message = describe_send_error(&e, self.timeout);
            warn!("Metadata request failed: {}", message);
            MetadataClientError::Server(message)
        })?;

        let status = response.status();

        if status.is_success() {
            return response.json::<MovieMetadata>().await.map_err(|e| {
                warn!("Failed to parse metadata response: {}", e);
                MetadataClientError::server(format!("Failed to parse metadata response: {}", e))
            });
        }

        if status == StatusCode::NOT_FOUND {
            debug!("Metadata store has no record");
            return Err(MetadataClientError::NotFound(id.clone()));
        }

        let body = response.text().await.map_err(|e| {
            warn!(status = status.as_u16(), "Failed to read metadata error body: {}", e);
            MetadataClientError::Server(describe_body_error(&e))
        })?;
        warn!(status = status.as_u16(), "Metadata store returned an error");

        if status.is_client_error() {
            Err(MetadataClientError::client(body, status.as_u16()))
        } else if status.is_server_error() {
            Err(MetadataClientError::Server(body_or_status(body, status)))
        } else {
            Err(MetadataClientError::server(format!(
                "Unexpected status {}: {}",
                status, body
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rest::config::spawn_truncated_response;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> RestMetadataClient {
        let config = RestClientConfig::new(server.url("/v1/movieinfos"))
            .with_timeout(Duration::from_secs(2));
        RestMetadataClient::new(config).unwrap()
    }

    fn movie_id(id: &str) -> MovieId {
        MovieId::new(id).unwrap()
    }

    fn dark_knight_rises_json() -> &'static str {
        r#"{
            "movieInfoId": "abc",
            "name": "Dark Knight Rises",
            "year": 2012,
            "cast": ["Christian Bale", "Tom Hardy"],
            "release_date": "2012-07-20"
        }"#
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = RestMetadataClient::new(RestClientConfig::new("localhost:8080"));
        assert!(matches!(result, Err(RestClientError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn movie_url_appends_encoded_segment() {
        let client =
            RestMetadataClient::new(RestClientConfig::new("http://localhost:8080/v1/movieinfos"))
                .unwrap();

        let url = client.movie_url(&movie_id("abc")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/movieinfos/abc");

        let url = client.movie_url(&movie_id("a b/c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/movieinfos/a%20b%2Fc");
    }

    #[test]
    fn movie_url_tolerates_trailing_slash() {
        let client =
            RestMetadataClient::new(RestClientConfig::new("http://localhost:8080/v1/movieinfos/"))
                .unwrap();

        let url = client.movie_url(&movie_id("abc")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/movieinfos/abc");
    }

    // ==================== httpmock-based tests ====================

    #[tokio::test]
    async fn fetch_by_id_decodes_metadata() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/abc");
            then.status(200)
                .header("content-type", "application/json")
                .body(dark_knight_rises_json());
        });

        let metadata = client_for(&server)
            .fetch_by_id(&movie_id("abc"))
            .await
            .unwrap();

        assert_eq!(metadata.title, "Dark Knight Rises");
        assert_eq!(metadata.year, 2012);
        assert_eq!(metadata.cast, vec!["Christian Bale", "Tom Hardy"]);
        mock.assert();
    }

    #[tokio::test]
    async fn fetch_by_id_maps_404_to_not_found() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/missing");
            then.status(404);
        });

        let result = client_for(&server).fetch_by_id(&movie_id("missing")).await;

        assert_eq!(
            result.unwrap_err(),
            MetadataClientError::NotFound(movie_id("missing"))
        );
        mock.assert();
    }

    #[tokio::test]
    async fn fetch_by_id_maps_other_4xx_to_client_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/abc");
            then.status(400).body("movieInfo.year must be a positive value");
        });

        let result = client_for(&server).fetch_by_id(&movie_id("abc")).await;

        assert_eq!(
            result.unwrap_err(),
            MetadataClientError::Client {
                message: "movieInfo.year must be a positive value".to_string(),
                status: 400,
            }
        );
        mock.assert();
    }

    #[tokio::test]
    async fn fetch_by_id_maps_5xx_to_server_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/abc");
            then.status(503).body("metadata store down");
        });

        let result = client_for(&server).fetch_by_id(&movie_id("abc")).await;

        assert_eq!(
            result.unwrap_err(),
            MetadataClientError::Server("metadata store down".to_string())
        );
        mock.assert();
    }

    #[tokio::test]
    async fn fetch_by_id_maps_malformed_body_to_server_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/abc");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"name": 42}"#);
        });

        let result = client_for(&server).fetch_by_id(&movie_id("abc")).await;

        assert!(matches!(result, Err(MetadataClientError::Server(_))));
        mock.assert();
    }

    #[tokio::test]
    async fn fetch_by_id_maps_connection_failure_to_server_error() {
        // Port 1 is reserved and nothing listens there.
        let client = RestMetadataClient::new(
            RestClientConfig::new("http://127.0.0.1:1/v1/movieinfos")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = client.fetch_by_id(&movie_id("abc")).await;

        assert!(matches!(result, Err(MetadataClientError::Server(_))));
    }

    #[tokio::test]
    async fn fetch_by_id_maps_timeout_to_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/abc");
            then.status(200)
                .delay(Duration::from_secs(2))
                .body(dark_knight_rises_json());
        });

        let client = RestMetadataClient::new(
            RestClientConfig::new(server.url("/v1/movieinfos"))
                .with_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        let result = client.fetch_by_id(&movie_id("abc")).await;

        match result {
            Err(MetadataClientError::Server(msg)) => assert!(msg.contains("timed out")),
            other => panic!("Expected timeout Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_by_id_maps_truncated_4xx_body_to_server_error() {
        let base_url = spawn_truncated_response("400 Bad Request").await;
        let client = RestMetadataClient::new(
            RestClientConfig::new(format!("{}/v1/movieinfos", base_url))
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = client.fetch_by_id(&movie_id("abc")).await;

        match result {
            Err(MetadataClientError::Server(msg)) => {
                assert!(msg.starts_with("Failed to read response body"))
            }
            other => panic!("Expected Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_by_id_makes_exactly_one_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/movieinfos/abc");
            then.status(500).body("boom");
        });

        let result = client_for(&server).fetch_by_id(&movie_id("abc")).await;

        assert!(result.is_err());
        mock.assert_calls(1);
    }
}
