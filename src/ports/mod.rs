//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the downstream services it composes. Adapters
//! implement these ports.
//!
//! - `MetadataClient` - fetch one movie metadata record by id
//! - `ReviewsClient` - fetch the reviews referencing a movie id

mod metadata_client;
mod reviews_client;

pub use metadata_client::{MetadataClient, MetadataClientError};
pub use reviews_client::{ReviewsClient, ReviewsClientError};
