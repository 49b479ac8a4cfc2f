//! HTTP DTOs for movie endpoints.
//!
//! The aggregated `Movie` is already shaped for serialization, so it is
//! re-exported directly as the success body.

pub use crate::domain::movie::Movie;

use serde::Serialize;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn upstream_unavailable(upstream: &str, message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_UNAVAILABLE".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "upstream": upstream })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_resource_and_id() {
        let error = ErrorResponse::not_found("Movie", "missing");
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "Movie not found: missing");
    }

    #[test]
    fn details_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::bad_request("bad id")).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn upstream_unavailable_names_upstream() {
        let json =
            serde_json::to_value(ErrorResponse::upstream_unavailable("reviews", "internal error"))
                .unwrap();
        assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
        assert_eq!(json["message"], "internal error");
        assert_eq!(json["details"]["upstream"], "reviews");
    }
}
