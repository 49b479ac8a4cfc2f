//! HTTP handlers for movie endpoints.
//!
//! These handlers connect Axum routes to the application layer query handler.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{GetMovieError, GetMovieHandler, GetMovieQuery};
use crate::domain::foundation::MovieId;

use super::dto::{ErrorResponse, Movie};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Movie API error that implements IntoResponse.
#[derive(Debug)]
pub struct MovieApiError(GetMovieError);

impl From<GetMovieError> for MovieApiError {
    fn from(error: GetMovieError) -> Self {
        Self(error)
    }
}

impl IntoResponse for MovieApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self.0 {
            GetMovieError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Movie", id.as_str()))
            }
            GetMovieError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            GetMovieError::UpstreamUnavailable { upstream, message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::upstream_unavailable(&upstream.to_string(), message),
            ),
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing movie dependencies.
#[derive(Clone)]
pub struct MovieAppState {
    get_movie: Arc<GetMovieHandler>,
}

impl MovieAppState {
    pub fn new(get_movie: GetMovieHandler) -> Self {
        Self {
            get_movie: Arc::new(get_movie),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /v1/movies/:id
///
/// Returns the movie's metadata together with all of its reviews.
pub async fn get_movie(
    State(state): State<MovieAppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Movie>, MovieApiError> {
    let movie_id = MovieId::new(movie_id).map_err(GetMovieError::from)?;

    let movie = state.get_movie.handle(GetMovieQuery::new(movie_id)).await?;

    Ok(Json(movie))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
