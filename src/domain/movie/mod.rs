//! Movie domain - metadata records, reviews, and the aggregated movie view.
//!
//! `MovieMetadata` and `Review` are owned by their respective downstream
//! stores; the gateway only reads them. `Movie` is the read-time projection
//! built per request by the aggregation handler.

mod aggregate;
mod metadata;
mod review;

pub use aggregate::Movie;
pub use metadata::MovieMetadata;
pub use review::Review;
