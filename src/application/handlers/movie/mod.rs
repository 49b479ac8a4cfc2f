//! Movie query handlers.

mod get_movie;

pub use get_movie::{GetMovieError, GetMovieHandler, GetMovieQuery, GetMovieResult, Upstream};
