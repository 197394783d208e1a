//! Saved places export ("Saved Places.json") reading.
//!
//! The export is a GeoJSON FeatureCollection of points. Only points with a
//! `Location` property inside the region's bounding box are kept; the rest
//! are dropped without complaint.

use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use geojson::{Feature, JsonObject};
use regex::Regex;
use serde_json::Value;
use tracing::info;

use crate::config::BoundingBox;
use crate::error::Result;
use crate::models::{GeoPoint, SavedPlace};
use crate::pip::geometry::read_feature_collection;

/// Load the admissible places of a saved places export, in file order.
pub fn load_saved_places(
    path: &Path,
    bbox: &BoundingBox,
    country: &str,
) -> Result<Vec<SavedPlace>> {
    let collection = read_feature_collection(path)?;
    info!("{} places", collection.features.len());

    let places: Vec<SavedPlace> = collection
        .features
        .iter()
        .filter_map(|feature| saved_place(feature, bbox, country))
        .collect();

    info!("{} places inside the region", places.len());
    Ok(places)
}

/// Convert one export feature, or `None` if it is not admissible.
pub fn saved_place(feature: &Feature, bbox: &BoundingBox, country: &str) -> Option<SavedPlace> {
    let location = point_coordinates(feature)?;
    if !bbox.contains(location.lon, location.lat) {
        return None;
    }

    // Only the Location object is required; other fields default when
    // missing or of the wrong type.
    let properties = feature.properties.as_ref()?;
    let place = properties.get("Location")?.as_object()?;

    let name = text(place, "Business Name")
        .or_else(|| text(properties, "Title"))
        .unwrap_or_default()
        .to_string();
    let address = text(place, "Address")
        .map(|address| split_address(address, country))
        .unwrap_or_default();
    let timestamp = text(properties, "Published")
        .or_else(|| text(properties, "Updated"))
        .and_then(parse_timestamp);

    Some(SavedPlace {
        name,
        address,
        url: text(properties, "Google Maps URL")
            .unwrap_or_default()
            .to_string(),
        timestamp,
        location,
    })
}

fn text<'a>(object: &'a JsonObject, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn point_coordinates(feature: &Feature) -> Option<GeoPoint> {
    match &feature.geometry.as_ref()?.value {
        geojson::Value::Point(position) if position.len() >= 2 => {
            Some(GeoPoint::new(position[0], position[1]))
        }
        _ => None,
    }
}

/// Split a comma separated address into lines, dropping a trailing
/// country segment.
pub fn split_address(address: &str, country: &str) -> Vec<String> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator =
        SEPARATOR.get_or_init(|| Regex::new(r",\s+").expect("valid separator regex"));

    if address.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = separator.split(address).map(str::to_string).collect();
    if lines.len() > 1 && lines.last().map(String::as_str) == Some(country) {
        lines.pop();
    }
    lines
}

fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
