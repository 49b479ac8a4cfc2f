//! Movie HTTP adapter module.
//!
//! Provides the REST endpoint for the aggregated movie view.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{MovieApiError, MovieAppState};
pub use routes::movie_routes;
