//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the public API with the cross-cutting layers every
//! request passes through: request-id assignment and propagation, tracing,
//! and the inbound request timeout.

pub mod movie;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use movie::{movie_routes, MovieAppState};

/// Builds the application router.
///
/// When `request_timeout` elapses the in-flight handler future is dropped,
/// cancelling any outstanding downstream call, and the client gets 408.
pub fn app_router(state: MovieAppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(movie_routes())
        .route("/health", get(movie::handlers::health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
