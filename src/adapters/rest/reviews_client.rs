//! REST Reviews Client - `ReviewsClient` over the reviews store's HTTP API.
//!
//! Issues `GET {base_url}?movieInfoId={id}`. A 404 or an empty 2xx body is
//! read as "no reviews" and returned as an empty list; a 5xx keeps the
//! store's body verbatim.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::config::{
    body_or_status, build_http_client, describe_body_error, describe_send_error, parse_base_url,
    RestClientConfig, RestClientError,
};
use crate::domain::foundation::MovieId;
use crate::domain::movie::Review;
use crate::ports::{ReviewsClient, ReviewsClientError};

/// Query parameter the reviews store filters on.
const MOVIE_INFO_ID_PARAM: &str = "movieInfoId";

/// Reviews store client backed by `reqwest`.
pub struct RestReviewsClient {
    base_url: Url,
    timeout: Duration,
    client: Client,
}

impl RestReviewsClient {
    pub fn new(config: RestClientConfig) -> Result<Self, RestClientError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = build_http_client(config.timeout)?;

        Ok(Self {
            base_url,
            timeout: config.timeout,
            client,
        })
    }

    fn reviews_url(&self, id: &MovieId) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(MOVIE_INFO_ID_PARAM, id.as_str());
        url
    }
}

#[async_trait]
impl ReviewsClient for RestReviewsClient {
    #[tracing::instrument(name = "reviews.fetch_by_metadata_id", skip(self), fields(movie_id = %id))]
    async fn fetch_by_metadata_id(&self, id: &MovieId) -> Result<Vec<Review>, ReviewsClientError> {
        let url = self.reviews_url(id);
        debug!(%url, "Fetching reviews");

        let response = self.client.get(url).send().await.map_err(|e| {
            let message = describe_send_error(&e, self.timeout);
            warn!("Reviews request failed: {}", message);
            ReviewsClientError::Transport(message)
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Reviews store returned 404, treating as no reviews");
            return Ok(Vec::new());
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read reviews response: {}", e);
            ReviewsClientError::Transport(describe_body_error(&e))
        })?;

        if status.is_success() {
            let reviews = decode_reviews(&body)?;
            debug!(count = reviews.len(), "Fetched reviews");
            return Ok(reviews);
        }

        let body = String::from_utf8_lossy(&body).into_owned();
        warn!(status = status.as_u16(), "Reviews store returned an error");

        if status.is_server_error() {
            Err(ReviewsClientError::Server(body_or_status(body, status)))
        } else {
            Err(ReviewsClientError::Transport(format!(
                "Unexpected status {}: {}",
                status, body
            )))
        }
    }
}

/// Decodes a 2xx body. An empty body (e.g. 204) carries no reviews.
fn decode_reviews(body: &[u8]) -> Result<Vec<Review>, ReviewsClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!("Failed to parse reviews response: {}", e);
        ReviewsClientError::Transport(format!("Failed to parse reviews response: {}", e))
    })
}
