//! Reviews Client Port - Interface to the reviews store.
//!
//! Reviews are fetched by the identifier of the movie they reference. An
//! empty result, including a 404 from the store, is a normal outcome and is
//! returned as an empty list rather than an error.

use async_trait::async_trait;

use crate::domain::foundation::MovieId;
use crate::domain::movie::Review;

/// Port for reading reviews of a movie.
#[async_trait]
pub trait ReviewsClient: Send + Sync {
    /// Fetches all reviews referencing `id`, in the order the store returns
    /// them.
    async fn fetch_by_metadata_id(&self, id: &MovieId) -> Result<Vec<Review>, ReviewsClientError>;
}

/// Errors returned by a [`ReviewsClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewsClientError {
    /// The store answered with a 5xx; the body is kept verbatim.
    #[error("Reviews service error: {0}")]
    Server(String),

    /// Connection failure, timeout, undecodable body, or an unexpected status.
    #[error("Reviews transport error: {0}")]
    Transport(String),
}

impl ReviewsClientError {
    /// The underlying message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Server(msg) | Self::Transport(msg) => msg,
        }
    }
}
