//! Point-in-Polygon (PIP) classification.
//!
//! Loads borough boundaries and their subregions from GeoJSON and resolves
//! points against them with an ordered, first-match linear scan.

mod boundary;
pub mod geometry;
mod service;
mod subregion;

pub use boundary::BoundarySet;
pub use service::Classifier;
pub use subregion::SubregionSet;

#[cfg(test)]
pub(crate) use service::tests::fixture;
