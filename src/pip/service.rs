//! Point classification against the borough/subregion hierarchy.

use geo::Point;
use tracing::warn;

use super::{BoundarySet, SubregionSet};
use crate::models::{Classification, UNRANKED};
use crate::ranking::RankTable;

/// Resolves points to (borough, subregion) with rank.
///
/// Resolution order: subregion, then borough, then the outside label.
pub struct Classifier {
    boundaries: BoundarySet,
    subregions: SubregionSet,
    ranks: RankTable,
    outside_label: String,
}

impl Classifier {
    pub fn new(
        boundaries: BoundarySet,
        subregions: SubregionSet,
        ranks: RankTable,
        outside_label: impl Into<String>,
    ) -> Self {
        Self {
            boundaries,
            subregions,
            ranks,
            outside_label: outside_label.into(),
        }
    }

    /// Resolve a point to its subregion, borough, or the outside label.
    pub fn classify(&self, point: Point<f64>) -> Classification {
        if let Some(subregion) = self.subregions.containing_subregion(&point) {
            let (group_label, rank) = match self.ranks.lookup(&subregion.code) {
                Some(entry) => (entry.label.clone(), entry.rank),
                None => {
                    warn!(
                        "No sort for colonia {} - {}",
                        subregion.code, subregion.raw_label
                    );
                    (subregion.raw_label.clone(), UNRANKED)
                }
            };
            return Classification {
                group_label,
                borough_label: subregion.borough.clone(),
                rank,
                code: subregion.code.clone(),
            };
        }

        if let Some(borough) = self.boundaries.containing_boundary(&point) {
            return Classification {
                group_label: String::new(),
                borough_label: borough.name.clone(),
                rank: borough.rank,
                code: String::new(),
            };
        }

        Classification {
            group_label: String::new(),
            borough_label: self.outside_label.clone(),
            rank: UNRANKED,
            code: String::new(),
        }
    }

    /// True if the subregion code has a curated rank.
    pub fn is_ranked(&self, code: &str) -> bool {
        self.ranks.lookup(code).is_some()
    }
}
