//! Application handlers.
//!
//! Query handlers that orchestrate calls across ports.

pub mod movie;

pub use movie::{GetMovieError, GetMovieHandler, GetMovieQuery, GetMovieResult, Upstream};
