//! Barrio - sorts a saved places export by borough and neighborhood.
//!
//! This library provides the boundary ingestion, classification and
//! ranking used by the `sort` binary.

pub mod config;
pub mod error;
pub mod models;
pub mod pip;
pub mod places;
pub mod ranking;
pub mod render;

pub use error::IngestError;
pub use models::{ClassifiedPlace, Classification, SavedPlace};
