//! Domain layer containing the movie catalog types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `movie` - Movie metadata, reviews, and the aggregated movie view

pub mod foundation;
pub mod movie;
