//! Movie Catalog - Aggregation gateway
//!
//! This crate composes a movie metadata store and a reviews store into a
//! single aggregated movie view served over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
