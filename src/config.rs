//! Region configuration: boundary sources, curated ranks, and the
//! admissibility bounding box.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Built-in configuration for Mexico City.
const DEFAULT_REGION: &str = include_str!("../data/cdmx.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub region: RegionConfig,
    pub bbox: BoundingBox,
    #[serde(default)]
    pub boroughs: Vec<BoroughConfig>,
    #[serde(default)]
    pub neighborhoods: Vec<NeighborhoodConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegionConfig {
    pub name: String,
    /// Borough label for points outside every boundary
    pub outside_label: String,
    /// Trailing address segment to drop, e.g. "Mexico"
    pub country: String,
    /// Boundary collection, relative to the data directory
    pub boundaries: PathBuf,
    #[serde(default = "default_boundary_name_property")]
    pub boundary_name_property: String,
    #[serde(default = "default_subregion_label_property")]
    pub subregion_label_property: String,
    #[serde(default = "default_subregion_code_property")]
    pub subregion_code_property: String,
}

/// Inclusive lon/lat box a saved place must fall in to be classified.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        lng >= self.min_lng && lng <= self.max_lng && lat >= self.min_lat && lat <= self.max_lat
    }
}

/// Curated borough entry. Boroughs with a `file` also get subregions.
#[derive(Debug, Deserialize, Clone)]
pub struct BoroughConfig {
    pub name: String,
    pub rank: u32,
    pub file: Option<PathBuf>,
}

/// Curated neighborhood: several subregion codes share one label and rank.
#[derive(Debug, Deserialize, Clone)]
pub struct NeighborhoodConfig {
    pub label: String,
    pub rank: u32,
    pub codes: Vec<String>,
}

fn default_boundary_name_property() -> String {
    "name".to_string()
}

fn default_subregion_label_property() -> String {
    "NOMBRE_COLONIA".to_string()
}

fn default_subregion_code_property() -> String {
    "CVE_COL".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The embedded Mexico City configuration.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_REGION)
    }

    /// Curated rank for a borough name, if any.
    pub fn borough_rank(&self, name: &str) -> Option<u32> {
        self.boroughs.iter().find(|b| b.name == name).map(|b| b.rank)
    }
}
