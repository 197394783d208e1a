//! Curated subregion ranking.

use hashbrown::HashMap;
use tracing::info;

use crate::config::NeighborhoodConfig;
use crate::error::{IngestError, Result};

/// Display label and rank for a subregion code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub label: String,
    pub rank: u32,
}

/// Subregion code -> curated label and rank.
///
/// Several codes may share one entry when a neighborhood spans several
/// source polygons.
#[derive(Debug, Clone, Default)]
pub struct RankTable {
    entries: HashMap<String, RankEntry>,
}

impl RankTable {
    /// Flatten curated neighborhoods into a code lookup.
    ///
    /// A code listed under two neighborhoods is rejected.
    pub fn build(neighborhoods: &[NeighborhoodConfig]) -> Result<Self> {
        let mut entries: HashMap<String, RankEntry> = HashMap::new();

        for neighborhood in neighborhoods {
            for code in &neighborhood.codes {
                if let Some(existing) = entries.get(code) {
                    return Err(IngestError::DuplicateRankCode {
                        code: code.clone(),
                        first: existing.label.clone(),
                        second: neighborhood.label.clone(),
                    });
                }
                entries.insert(
                    code.clone(),
                    RankEntry {
                        label: neighborhood.label.clone(),
                        rank: neighborhood.rank,
                    },
                );
            }
        }

        info!(
            "Rank table: {} codes in {} neighborhoods",
            entries.len(),
            neighborhoods.len()
        );
        Ok(Self { entries })
    }

    pub fn lookup(&self, code: &str) -> Option<&RankEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn neighborhood(label: &str, rank: u32, codes: &[&str]) -> NeighborhoodConfig {
        NeighborhoodConfig {
            label: label.to_string(),
            rank,
            codes: codes.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_codes_share_entry() {
        let table = RankTable::build(&[
            neighborhood("Roma Sur", 11, &["15-071", "15-072"]),
            neighborhood("Argentina", 14, &["16-027"]),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("15-071"), table.lookup("15-072"));
        let entry = table.lookup("16-027").unwrap();
        assert_eq!(entry.label, "Argentina");
        assert_eq!(entry.rank, 14);
        assert!(table.lookup("99-999").is_none());
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err = RankTable::build(&[
            neighborhood("Centro", 4, &["15-037"]),
            neighborhood("Guerrero", 5, &["15-036", "15-037"]),
        ])
        .unwrap_err();

        match err {
            IngestError::DuplicateRankCode {
                code,
                first,
                second,
            } => {
                assert_eq!(code, "15-037");
                assert_eq!(first, "Centro");
                assert_eq!(second, "Guerrero");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_builtin_table() {
        let config = Config::builtin().unwrap();
        let table = RankTable::build(&config.neighborhoods).unwrap();
        assert_eq!(table.lookup("15-075").unwrap().label, "Santa Maria la Ribera");
        assert_eq!(table.lookup("03-062").unwrap().rank, 34);
        assert_eq!(table.lookup("16-018").unwrap().label, "Polanco");
    }
}
