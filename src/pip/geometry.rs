//! GeoJSON reading and polygon extraction.
//!
//! Containment and centroid come from `geo`; this module only turns
//! GeoJSON records into `geo` polygons.

use std::fs;
use std::path::Path;

use geo::{Centroid, Geometry, Point, Polygon};
use geojson::{Feature, FeatureCollection, GeoJson};

use crate::error::{IngestError, Result};

/// Polygons found in a boundary geometry.
#[derive(Debug)]
pub enum Extracted {
    /// A single polygon record
    Polygon(Polygon<f64>),
    /// Polygon members of a multi-geometry record (possibly none)
    Multi(Vec<Polygon<f64>>),
    /// Any other geometry; carries the GeoJSON type name
    Unsupported(&'static str),
}

/// Read a GeoJSON file that must hold a FeatureCollection.
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feature_collection(&content).map_err(|source| IngestError::GeoJson {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

pub fn parse_feature_collection(
    content: &str,
) -> std::result::Result<FeatureCollection, geojson::Error> {
    let geojson: GeoJson = content.parse()?;
    FeatureCollection::try_from(geojson)
}

/// Extract the polygons of a boundary geometry.
///
/// `GeometryCollection` members that are not polygons are dropped.
pub fn extract_polygons(geometry: &geojson::Geometry) -> Extracted {
    let kind = type_name(&geometry.value);
    match Geometry::<f64>::try_from(geometry.clone()) {
        Ok(Geometry::Polygon(polygon)) => Extracted::Polygon(polygon),
        Ok(Geometry::MultiPolygon(multi)) => Extracted::Multi(multi.0),
        Ok(Geometry::GeometryCollection(collection)) => Extracted::Multi(
            collection
                .0
                .into_iter()
                .filter_map(|member| match member {
                    Geometry::Polygon(polygon) => Some(polygon),
                    _ => None,
                })
                .collect(),
        ),
        _ => Extracted::Unsupported(kind),
    }
}

/// Convert a geometry that must be a single polygon.
pub fn as_polygon(geometry: &geojson::Geometry) -> Option<Polygon<f64>> {
    match Geometry::<f64>::try_from(geometry.clone()) {
        Ok(Geometry::Polygon(polygon)) => Some(polygon),
        _ => None,
    }
}

pub fn centroid(polygon: &Polygon<f64>) -> Option<Point<f64>> {
    polygon.centroid()
}

/// GeoJSON type name of a geometry value.
pub fn type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// String value of a feature property. Numeric values are stringified.
pub fn string_property(feature: &Feature, key: &str) -> Option<String> {
    match feature.properties.as_ref()?.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<Vec<Vec<f64>>> {
        vec![vec![
            vec![x, y],
            vec![x + size, y],
            vec![x + size, y + size],
            vec![x, y + size],
            vec![x, y],
        ]]
    }

    #[test]
    fn test_extract_single_polygon() {
        let geometry = geojson::Geometry::new(geojson::Value::Polygon(square(0.0, 0.0, 1.0)));
        assert!(matches!(extract_polygons(&geometry), Extracted::Polygon(_)));
    }

    #[test]
    fn test_extract_collection_drops_non_polygons() {
        let geometry = geojson::Geometry::new(geojson::Value::GeometryCollection(vec![
            geojson::Geometry::new(geojson::Value::Polygon(square(0.0, 0.0, 1.0))),
            geojson::Geometry::new(geojson::Value::LineString(vec![
                vec![0.0, 0.0],
                vec![1.0, 1.0],
            ])),
            geojson::Geometry::new(geojson::Value::Polygon(square(5.0, 5.0, 1.0))),
        ]));
        match extract_polygons(&geometry) {
            Extracted::Multi(polygons) => assert_eq!(polygons.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_extract_collection_without_polygons() {
        let geometry = geojson::Geometry::new(geojson::Value::GeometryCollection(vec![
            geojson::Geometry::new(geojson::Value::Point(vec![0.0, 0.0])),
        ]));
        match extract_polygons(&geometry) {
            Extracted::Multi(polygons) => assert!(polygons.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_extract_unsupported() {
        let geometry = geojson::Geometry::new(geojson::Value::Point(vec![-99.1, 19.4]));
        assert!(matches!(
            extract_polygons(&geometry),
            Extracted::Unsupported("Point")
        ));
    }

    #[test]
    fn test_centroid_of_square() {
        let geometry = geojson::Geometry::new(geojson::Value::Polygon(square(0.0, 0.0, 2.0)));
        let polygon = as_polygon(&geometry).unwrap();
        let center = centroid(&polygon).unwrap();
        assert!((center.x() - 1.0).abs() < 1e-9);
        assert!((center.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_requires_feature_collection() {
        let point = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        assert!(parse_feature_collection(point).is_err());

        let empty = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(parse_feature_collection(empty).unwrap().features.is_empty());
    }

    #[test]
    fn test_string_property_accepts_numbers() {
        let collection = parse_feature_collection(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": null,
                 "properties": {"CVE_COL": 1575, "NOMBRE_COLONIA": "Centro"}}
            ]}"#,
        )
        .unwrap();
        let feature = &collection.features[0];
        assert_eq!(string_property(feature, "CVE_COL").as_deref(), Some("1575"));
        assert_eq!(
            string_property(feature, "NOMBRE_COLONIA").as_deref(),
            Some("Centro")
        );
        assert_eq!(string_property(feature, "missing"), None);
    }
}
