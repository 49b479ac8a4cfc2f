//! Movie metadata record as served by the metadata store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical movie record (title, year, cast, release date).
///
/// The metadata store validates every field except the identifier before
/// accepting a record, so the gateway takes the payload as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieMetadata {
    /// Store-assigned identifier; absent only before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_info_id: Option<String>,

    /// Movie title. The metadata store calls this field `name`.
    #[serde(rename = "name", alias = "title")]
    pub title: String,

    /// Release year.
    pub year: u32,

    /// Cast members in billing order.
    pub cast: Vec<String>,

    /// Release date (ISO-8601 calendar date).
    #[serde(alias = "release_date")]
    pub release_date: NaiveDate,
}
