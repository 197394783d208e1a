//! Borough boundary ingestion.

use std::path::Path;

use geo::Point;
use geojson::FeatureCollection;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{IngestError, Result};
use crate::models::{Borough, DEFAULT_BOROUGH_RANK};
use crate::pip::geometry::{extract_polygons, read_feature_collection, string_property, Extracted};

/// Boroughs in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct BoundarySet {
    boroughs: Vec<Borough>,
}

impl BoundarySet {
    /// Load the boundary collection named by the configuration.
    pub fn load(config: &Config, data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(&config.region.boundaries);
        info!("Loading borough boundaries from {}", path.display());
        let collection = read_feature_collection(&path)?;
        Self::from_collection(&collection, config)
    }

    /// Build boroughs from boundary features.
    ///
    /// Fails on the first feature whose geometry is not a polygon or a
    /// multi-geometry with at least one polygon.
    pub fn from_collection(collection: &FeatureCollection, config: &Config) -> Result<Self> {
        let property = &config.region.boundary_name_property;
        let mut boroughs = Vec::with_capacity(collection.features.len());

        for (index, feature) in collection.features.iter().enumerate() {
            let name =
                string_property(feature, property).ok_or_else(|| IngestError::MissingName {
                    index,
                    property: property.clone(),
                })?;

            let Some(geometry) = feature.geometry.as_ref() else {
                return Err(IngestError::UnsupportedGeometry {
                    borough: name,
                    kind: "null".to_string(),
                });
            };

            let polygons = match extract_polygons(geometry) {
                Extracted::Polygon(polygon) => vec![polygon],
                Extracted::Multi(polygons) if polygons.is_empty() => {
                    return Err(IngestError::NoPolygons { borough: name });
                }
                Extracted::Multi(polygons) => polygons,
                Extracted::Unsupported(kind) => {
                    return Err(IngestError::UnsupportedGeometry {
                        borough: name,
                        kind: kind.to_string(),
                    });
                }
            };

            let rank = config.borough_rank(&name).unwrap_or(DEFAULT_BOROUGH_RANK);
            debug!("Borough {} ({} polygons, rank {})", name, polygons.len(), rank);

            boroughs.push(Borough {
                name,
                polygons,
                rank,
            });
        }

        info!("Found {} boroughs", boroughs.len());
        Ok(Self { boroughs })
    }

    /// First borough, in ingestion order, with a polygon containing the point.
    pub fn containing_boundary(&self, point: &Point<f64>) -> Option<&Borough> {
        self.boroughs.iter().find(|borough| borough.contains(point))
    }

    pub fn len(&self) -> usize {
        self.boroughs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boroughs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Borough> {
        self.boroughs.iter()
    }
}
