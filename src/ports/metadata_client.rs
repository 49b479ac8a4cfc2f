//! Metadata Client Port - Interface to the movie metadata store.
//!
//! The metadata store owns canonical movie records. The gateway needs a
//! single read operation from it: fetch one record by identifier.
//!
//! # Failure modes
//!
//! - `NotFound` - the store answered 404; terminal.
//! - `Client` - any other 4xx; carries the store's message and status verbatim.
//! - `Server` - 5xx, transport failure, or an undecodable body.
//!
//! Implementations make exactly one downstream call per invocation and never
//! retry or cache.

use async_trait::async_trait;

use crate::domain::foundation::MovieId;
use crate::domain::movie::MovieMetadata;

/// Port for reading movie metadata.
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// Fetches the metadata record for `id`.
    async fn fetch_by_id(&self, id: &MovieId) -> Result<MovieMetadata, MetadataClientError>;
}

/// Errors returned by a [`MetadataClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataClientError {
    #[error("No movie metadata found for id: {0}")]
    NotFound(MovieId),

    #[error("Metadata request rejected ({status}): {message}")]
    Client { message: String, status: u16 },

    #[error("Metadata service error: {0}")]
    Server(String),
}

impl MetadataClientError {
    /// Creates a client error from a downstream 4xx response.
    pub fn client(message: impl Into<String>, status: u16) -> Self {
        Self::Client {
            message: message.into(),
            status,
        }
    }

    /// Creates a server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Whether a caller could reasonably retry.
    ///
    /// Only server-side failures are transient. The gateway reports this in
    /// its failure logs and never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Server(_))
    }
}
