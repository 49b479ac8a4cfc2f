//! GetMovieHandler - Query handler composing metadata and reviews.
//!
//! Fetches the metadata record first and only asks for reviews once the
//! movie is known to exist. Any failure is returned as-is; there is no
//! degraded metadata-only result.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{MovieId, ValidationError};
use crate::domain::movie::Movie;
use crate::ports::{MetadataClient, MetadataClientError, ReviewsClient, ReviewsClientError};

/// Query to get the aggregated view of one movie.
#[derive(Debug, Clone)]
pub struct GetMovieQuery {
    pub movie_id: MovieId,
}

impl GetMovieQuery {
    pub fn new(movie_id: MovieId) -> Self {
        Self { movie_id }
    }
}

/// Result of a successful movie query.
pub type GetMovieResult = Movie;

/// Downstream service a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Metadata,
    Reviews,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Metadata => write!(f, "metadata"),
            Upstream::Reviews => write!(f, "reviews"),
        }
    }
}

/// Errors surfaced by the gateway to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetMovieError {
    /// The metadata store confirmed the id does not exist.
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    /// A downstream rejected the request with a 4xx other than 404, or the
    /// id itself was invalid.
    #[error("Bad request ({status}): {message}")]
    BadRequest { message: String, status: u16 },

    /// A downstream answered 5xx or could not be reached.
    #[error("{upstream} service unavailable: {message}")]
    UpstreamUnavailable { upstream: Upstream, message: String },
}

impl From<MetadataClientError> for GetMovieError {
    fn from(err: MetadataClientError) -> Self {
        match err {
            MetadataClientError::NotFound(id) => GetMovieError::NotFound(id),
            MetadataClientError::Client { message, status } => {
                GetMovieError::BadRequest { message, status }
            }
            MetadataClientError::Server(message) => GetMovieError::UpstreamUnavailable {
                upstream: Upstream::Metadata,
                message,
            },
        }
    }
}

impl From<ReviewsClientError> for GetMovieError {
    fn from(err: ReviewsClientError) -> Self {
        GetMovieError::UpstreamUnavailable {
            upstream: Upstream::Reviews,
            message: err.message().to_string(),
        }
    }
}

impl From<ValidationError> for GetMovieError {
    fn from(err: ValidationError) -> Self {
        GetMovieError::BadRequest {
            message: err.to_string(),
            status: 400,
        }
    }
}

/// Handler for retrieving the aggregated movie view.
///
/// Holds no per-request state; one instance serves any number of concurrent
/// queries.
pub struct GetMovieHandler {
    metadata: Arc<dyn MetadataClient>,
    reviews: Arc<dyn ReviewsClient>,
}

impl GetMovieHandler {
    pub fn new(metadata: Arc<dyn MetadataClient>, reviews: Arc<dyn ReviewsClient>) -> Self {
        Self { metadata, reviews }
    }

    #[tracing::instrument(name = "get_movie", skip(self, query), fields(movie_id = %query.movie_id))]
    pub async fn handle(&self, query: GetMovieQuery) -> Result<GetMovieResult, GetMovieError> {
        let movie_info = self
            .metadata
            .fetch_by_id(&query.movie_id)
            .await
            .map_err(|e| {
                warn!(
                    error = %e,
                    retryable = e.is_retryable(),
                    "Metadata lookup failed, skipping reviews"
                );
                GetMovieError::from(e)
            })?;

        let reviews = self
            .reviews
            .fetch_by_metadata_id(&query.movie_id)
            .await
            .map_err(|e| {
                warn!(error = %e, "Reviews lookup failed, discarding metadata");
                GetMovieError::from(e)
            })?;

        let movie = Movie::new(movie_info, reviews);
        debug!(
            review_count = movie.review_count(),
            average_rating = ?movie.average_rating(),
            "Aggregated movie"
        );
        Ok(movie)
    }
}
