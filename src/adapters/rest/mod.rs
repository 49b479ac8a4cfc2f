//! REST adapters for the downstream movie services.
//!
//! - `RestMetadataClient` - metadata store (`GET {base}/{id}`)
//! - `RestReviewsClient` - reviews store (`GET {base}?movieInfoId={id}`)
//!
//! Each adapter owns one pooled `reqwest::Client`; its base URL and timeout
//! are fixed at construction.

mod config;
mod metadata_client;
mod reviews_client;

pub use config::{RestClientConfig, RestClientError};
pub use metadata_client::RestMetadataClient;
pub use reviews_client::RestReviewsClient;
