//! Application layer - Queries and Handlers.
//!
//! This layer coordinates the downstream ports. The gateway is read-only,
//! so there are query handlers only.

pub mod handlers;

pub use handlers::{GetMovieError, GetMovieHandler, GetMovieQuery, GetMovieResult, Upstream};
