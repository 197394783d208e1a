//! Administrative hierarchy types: boroughs and their subregions.

use geo::{Contains, Point, Polygon};
use serde::Serialize;

/// Rank given to a borough that has no curated rank.
pub const DEFAULT_BOROUGH_RANK: u32 = 90;

/// Rank given to unranked subregions and to points outside every borough.
pub const UNRANKED: u32 = 99;

/// Top-level administrative region (an alcaldía in Mexico City).
///
/// A borough made of disjoint parts keeps each part as its own polygon.
#[derive(Debug, Clone)]
pub struct Borough {
    pub name: String,
    pub polygons: Vec<Polygon<f64>>,
    pub rank: u32,
}

impl Borough {
    /// True if any of the borough's polygons contains the point.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(point))
    }
}

/// Finer-grained named area (a colonia) inside a borough.
#[derive(Debug, Clone)]
pub struct Subregion {
    /// Name of the owning borough
    pub borough: String,
    pub polygon: Polygon<f64>,
    /// Stable identifier, e.g. "15-075"
    pub code: String,
    /// Label as found in the source data
    pub raw_label: String,
    /// Polygon centroid
    pub center: Option<Point<f64>>,
}

impl Subregion {
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.polygon.contains(point)
    }
}

/// Result of resolving a point against the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Effective neighborhood label, empty when no subregion matched
    pub group_label: String,
    pub borough_label: String,
    pub rank: u32,
    /// Subregion code, empty when no subregion matched
    pub code: String,
}

/// Title of a display group: "{borough} - {group}", or the borough alone
/// when there is no group label.
pub fn group_title(borough: &str, group: &str) -> String {
    if group.is_empty() {
        borough.to_string()
    } else {
        format!("{} - {}", borough, group)
    }
}
