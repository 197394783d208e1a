//! Fatal ingestion errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort ingestion of boundaries, tables, or saved places.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file is not a GeoJSON feature collection.
    #[error("invalid GeoJSON in {}: {source}", .path.display())]
    GeoJson {
        path: PathBuf,
        #[source]
        source: Box<geojson::Error>,
    },

    /// A region configuration could not be parsed.
    #[error("invalid region configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A boundary record has a geometry we cannot turn into polygons.
    #[error("{borough}, geometry type is {kind}")]
    UnsupportedGeometry { borough: String, kind: String },

    /// A multi-geometry boundary record contains no polygon.
    #[error("{borough}, no polygons")]
    NoPolygons { borough: String },

    /// A boundary record has no usable name property.
    #[error("boundary feature #{index} has no '{property}' property")]
    MissingName { index: usize, property: String },

    /// The same subregion code appears under two curated neighborhoods.
    #[error("code {code} is ranked under both '{first}' and '{second}'")]
    DuplicateRankCode {
        code: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
