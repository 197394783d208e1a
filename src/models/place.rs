//! Saved place records, before and after classification.

use chrono::{DateTime, Utc};
use geo_types::Point;
use serde::{Deserialize, Serialize};

use super::admin::{group_title, Classification};

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// An admissible saved place, as read from the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlace {
    /// Display name (business name when the export has one)
    pub name: String,

    /// Address split into lines, country suffix removed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,

    /// External link (Google Maps URL)
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    pub location: GeoPoint,
}

/// A saved place resolved against the borough/subregion hierarchy.
///
/// Built once during classification and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedPlace {
    pub name: String,
    pub address: Vec<String>,
    pub url: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub lon: f64,
    pub lat: f64,
    /// Subregion code, empty when unresolved to a subregion
    pub code: String,
    pub rank: u32,
    pub group_label: String,
    pub borough_label: String,
}

impl ClassifiedPlace {
    pub fn new(place: SavedPlace, classification: Classification) -> Self {
        Self {
            name: place.name,
            address: place.address,
            url: place.url,
            timestamp: place.timestamp,
            lon: place.location.lon,
            lat: place.location.lat,
            code: classification.code,
            rank: classification.rank,
            group_label: classification.group_label,
            borough_label: classification.borough_label,
        }
    }

    /// Group title: "{borough} - {group}" or just the borough.
    pub fn title(&self) -> String {
        group_title(&self.borough_label, &self.group_label)
    }
}
