//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `rest` - reqwest clients for the metadata and reviews stores
//! - `http` - Axum inbound API

pub mod http;
pub mod rest;

pub use rest::{RestClientConfig, RestClientError, RestMetadataClient, RestReviewsClient};
