//! Aggregated movie view: one metadata record plus its reviews.

use serde::{Deserialize, Serialize};

use super::{MovieMetadata, Review};

/// Read-time projection combining a movie's metadata with its reviews.
///
/// Built per request and never persisted. Reviews keep the order in which
/// the reviews store returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_info: MovieMetadata,
    pub reviews: Vec<Review>,
}

impl Movie {
    pub fn new(movie_info: MovieMetadata, reviews: Vec<Review>) -> Self {
        Self { movie_info, reviews }
    }

    /// Number of reviews attached to this movie.
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Mean rating across all reviews, or `None` when there are none.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: f64 = self.reviews.iter().map(|r| r.rating).sum();
        Some(total / self.reviews.len() as f64)
    }
}
