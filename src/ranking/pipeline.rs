//! Classification of a whole place set and its display order.

use serde::Serialize;
use tracing::info;

use crate::models::{ClassifiedPlace, SavedPlace};
use crate::pip::Classifier;

/// One place in display order, with its group title.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEntry<'a> {
    pub place: &'a ClassifiedPlace,
    pub title: String,
    /// True when a group header should be emitted before this place
    pub new_group: bool,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub classified: usize,
    pub groups: usize,
    /// Places in a subregion whose code has no curated rank
    pub unranked: usize,
}

/// Classify every place, keeping input order.
pub fn classify_all(classifier: &Classifier, places: Vec<SavedPlace>) -> Vec<ClassifiedPlace> {
    places
        .into_iter()
        .map(|place| {
            let classification = classifier.classify(place.location.to_point());
            ClassifiedPlace::new(place, classification)
        })
        .collect()
}

/// Order places for display: by rank, then latitude descending, then
/// longitude ascending.
///
/// Done as three stable single-key sorts, least significant key first.
pub fn order_for_display(mut places: Vec<ClassifiedPlace>) -> Vec<ClassifiedPlace> {
    places.sort_by(|a, b| a.lon.total_cmp(&b.lon));
    places.sort_by(|a, b| b.lat.total_cmp(&a.lat));
    places.sort_by_key(|place| place.rank);
    places
}

/// Attach group titles to ordered places.
///
/// A group starts whenever a non-empty title differs from the last
/// non-empty one. Titles are not regrouped, so a title can start more
/// than one group.
pub fn group_for_display(places: &[ClassifiedPlace]) -> Vec<DisplayEntry<'_>> {
    places
        .iter()
        .scan(String::new(), |current, place| {
            let title = place.title();
            let new_group = !title.is_empty() && title != *current;
            if new_group {
                current.clone_from(&title);
            }
            Some(DisplayEntry {
                place,
                title,
                new_group,
            })
        })
        .collect()
}

impl RunSummary {
    pub fn new(classifier: &Classifier, entries: &[DisplayEntry<'_>]) -> Self {
        Self {
            classified: entries.len(),
            groups: entries.iter().filter(|e| e.new_group).count(),
            unranked: entries
                .iter()
                .filter(|e| !e.place.code.is_empty() && !classifier.is_ranked(&e.place.code))
                .count(),
        }
    }

    pub fn log(&self) {
        info!(
            "Classified {} places into {} groups ({} in unranked colonias)",
            self.classified, self.groups, self.unranked
        );
    }
}
