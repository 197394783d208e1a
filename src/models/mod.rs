//! Core data models for the classification pipeline.

pub mod admin;
pub mod place;

pub use admin::{
    group_title, Borough, Classification, Subregion, DEFAULT_BOROUGH_RANK, UNRANKED,
};
pub use place::{ClassifiedPlace, GeoPoint, SavedPlace};
