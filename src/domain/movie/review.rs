//! Review record as served by the reviews store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ReviewId;

/// A single review of a movie.
///
/// `movie_info_id` references a metadata record, but the reviews store does
/// not enforce that the reference exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<ReviewId>,

    pub movie_info_id: String,

    #[serde(default)]
    pub comment: String,

    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_payload() {
        let json = r#"{
            "reviewId": "r1",
            "movieInfoId": "abc",
            "comment": "Awesome Movie",
            "rating": 9.0
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.review_id, Some(ReviewId::new("r1")));
        assert_eq!(review.movie_info_id, "abc");
        assert_eq!(review.comment, "Awesome Movie");
        assert!((review.rating - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_comment_defaults_to_empty() {
        let json = r#"{"movieInfoId": "abc", "rating": 7.5}"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.comment, "");
        assert_eq!(review.review_id, None);
    }

    #[test]
    fn missing_movie_reference_is_rejected() {
        let json = r#"{"comment": "Great", "rating": 8.0}"#;
        assert!(serde_json::from_str::<Review>(json).is_err());
    }
}
