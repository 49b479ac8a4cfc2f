//! Route configuration for movie endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_movie, MovieAppState};

/// Creates the movie router.
///
/// Routes:
/// - `GET /v1/movies/:id` - Aggregated movie view (metadata + reviews)
pub fn movie_routes() -> Router<MovieAppState> {
    Router::new().route("/v1/movies/:id", get(get_movie))
}
