/*! Merging

Vocabulary sources and partial corpora are merged by key (the vocabulary word).
What happens on a key collision is decided by a [MergeStrategy].
!*/
use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};
use serde::Deserialize;

use crate::io::VocabularySource;
use crate::types::VocabularyEntry;

/// Policy applied when two merged maps hold the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// later values replace earlier ones, keeping the position of the first insertion.
    #[default]
    LastWriteWins,
    /// earlier values are kept.
    FirstWriteWins,
    /// like [MergeStrategy::LastWriteWins], but every collision is logged.
    ReportConflicts,
}

impl std::str::FromStr for MergeStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-write-wins" | "last_write_wins" => Ok(MergeStrategy::LastWriteWins),
            "first-write-wins" | "first_write_wins" => Ok(MergeStrategy::FirstWriteWins),
            "report-conflicts" | "report_conflicts" => Ok(MergeStrategy::ReportConflicts),
            other => Err(format!("unknown merge strategy: {}", other)),
        }
    }
}

/// Merge `maps` in order following `strategy`.
///
/// Returns the merged map and the keys that collided (in collision order, once per collision).
pub fn merge_maps<V>(
    maps: impl IntoIterator<Item = IndexMap<String, V>>,
    strategy: MergeStrategy,
) -> (IndexMap<String, V>, Vec<String>) {
    let mut merged = IndexMap::new();
    let mut conflicts = Vec::new();

    for map in maps {
        for (key, value) in map {
            if merged.contains_key(&key) {
                conflicts.push(key.clone());
                match strategy {
                    MergeStrategy::FirstWriteWins => {
                        debug!("keeping first value for {:?}", key);
                        continue;
                    }
                    MergeStrategy::ReportConflicts => {
                        warn!("conflict on {:?}: later value replaces earlier one", key)
                    }
                    MergeStrategy::LastWriteWins => debug!("replacing value for {:?}", key),
                }
            }
            merged.insert(key, value);
        }
    }

    (merged, conflicts)
}

/// Merge vocabulary sources.
///
/// List-shaped sources are concatenated in order without deduplication.
/// Object-shaped sources are merged by word with `strategy`, and come after list-shaped entries.
pub fn merge_sources(
    sources: Vec<VocabularySource>,
    strategy: MergeStrategy,
) -> Vec<VocabularyEntry> {
    let mut sequence = Vec::new();
    let mut mappings = Vec::new();

    for source in sources {
        match source {
            VocabularySource::Sequence(entries) => sequence.extend(entries),
            VocabularySource::Mapping(map) => mappings.push(map),
        }
    }

    let (merged, _) = merge_maps(mappings, strategy);
    sequence.extend(merged.into_values());
    sequence
}

/// Remove repeated items, keeping the first occurrence and the original order.
pub fn dedup_stable<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().unique().collect()
}
