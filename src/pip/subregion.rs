//! Subregion (colonia) ingestion.

use std::path::Path;

use geo::Point;
use geojson::FeatureCollection;
use hashbrown::HashSet;
use tracing::{debug, info, warn};

use crate::config::{Config, RegionConfig};
use crate::error::Result;
use crate::models::Subregion;
use crate::pip::geometry::{as_polygon, centroid, read_feature_collection, string_property};

/// Subregions of every borough that has a detail file, in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct SubregionSet {
    subregions: Vec<Subregion>,
}

impl SubregionSet {
    /// Load the detail file of each configured borough, in configuration order.
    ///
    /// Boroughs without a detail file are tracked at borough granularity only.
    pub fn load(config: &Config, data_dir: &Path) -> Result<Self> {
        let mut set = Self::default();
        for borough in &config.boroughs {
            let Some(file) = &borough.file else {
                debug!("No subregion file for {}", borough.name);
                continue;
            };
            let path = data_dir.join(file);
            debug!("Loading subregions of {} from {}", borough.name, path.display());
            let collection = read_feature_collection(&path)?;
            set.extend(&borough.name, &collection, &config.region);
        }
        info!("Parsed {} colonias", set.len());
        Ok(set)
    }

    /// Append the polygon features of one borough's detail collection.
    ///
    /// Non-polygon features and features without a label or code are skipped.
    pub fn extend(
        &mut self,
        borough: &str,
        collection: &FeatureCollection,
        region: &RegionConfig,
    ) {
        let mut seen: HashSet<String> = self.subregions.iter().map(|s| s.code.clone()).collect();

        for feature in &collection.features {
            let Some(polygon) = feature.geometry.as_ref().and_then(as_polygon) else {
                debug!("Skipping non-polygon feature in {}", borough);
                continue;
            };

            let label = string_property(feature, &region.subregion_label_property);
            let code = string_property(feature, &region.subregion_code_property);
            let (Some(raw_label), Some(code)) = (label, code) else {
                warn!("Skipping {} feature without label or code", borough);
                continue;
            };

            if !seen.insert(code.clone()) {
                warn!("Duplicate subregion code {} ({} - {})", code, borough, raw_label);
            }

            let center = centroid(&polygon);
            self.subregions.push(Subregion {
                borough: borough.to_string(),
                polygon,
                code,
                raw_label,
                center,
            });
        }
    }

    /// First subregion, across all boroughs, whose polygon contains the point.
    pub fn containing_subregion(&self, point: &Point<f64>) -> Option<&Subregion> {
        self.subregions.iter().find(|s| s.contains(point))
    }

    pub fn len(&self) -> usize {
        self.subregions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subregions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subregion> {
        self.subregions.iter()
    }
}
