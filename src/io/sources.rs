//! Vocabulary source files.
//!
//! A source is either a list of entries, or an object mapping words to entries.
//! In the latter case, entries may omit their `word` field, which is then taken from the key.
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::types::VocabularyEntry;

use super::read_value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VocabularySource {
    Sequence(Vec<VocabularyEntry>),
    Mapping(IndexMap<String, VocabularyEntry>),
}

impl VocabularySource {
    /// Convert a parsed file.
    ///
    /// Malformed entries are skipped, and their description is pushed into `skipped`.
    /// A top-level value that is neither a list nor an object is an error.
    pub fn from_value(value: Value, skipped: &mut Vec<String>) -> Result<Self, Error> {
        match value {
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for (idx, item) in items.into_iter().enumerate() {
                    match serde_json::from_value::<VocabularyEntry>(item) {
                        Ok(entry) => entries.push(entry),
                        Err(e) => skipped.push(format!("entry {}: {}", idx, e)),
                    }
                }
                Ok(VocabularySource::Sequence(entries))
            }
            Value::Object(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (word, item) in map {
                    let item = match item {
                        Value::Object(mut fields) => {
                            fields
                                .entry("word")
                                .or_insert_with(|| Value::String(word.clone()));
                            Value::Object(fields)
                        }
                        other => other,
                    };
                    match serde_json::from_value::<VocabularyEntry>(item) {
                        Ok(entry) => {
                            entries.insert(word, entry);
                        }
                        Err(e) => skipped.push(format!("entry {:?}: {}", word, e)),
                    }
                }
                Ok(VocabularySource::Mapping(entries))
            }
            _ => Err(Error::Custom(
                "vocabulary source must be a list or an object".to_string(),
            )),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            VocabularySource::Sequence(v) => v.len(),
            VocabularySource::Mapping(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in file order, for in-place edition.
    pub fn entries_mut(&mut self) -> Box<dyn Iterator<Item = &mut VocabularyEntry> + '_> {
        match self {
            VocabularySource::Sequence(v) => Box::new(v.iter_mut()),
            VocabularySource::Mapping(m) => Box::new(m.values_mut()),
        }
    }

    /// Entries in file order.
    pub fn into_entries(self) -> Vec<VocabularyEntry> {
        match self {
            VocabularySource::Sequence(v) => v,
            VocabularySource::Mapping(m) => m.into_values().collect(),
        }
    }
}

/// Load a single source.
///
/// A missing file is not an error: it is reported and `None` is returned.
pub fn load_source(path: &Path) -> Result<Option<VocabularySource>, Error> {
    if !path.exists() {
        warn!("vocabulary source {:?} not found, skipping", path);
        return Ok(None);
    }

    let mut skipped = Vec::new();
    let source = VocabularySource::from_value(read_value(path)?, &mut skipped)?;
    for s in &skipped {
        warn!("{:?}: skipped malformed {}", path, s);
    }
    info!("{:?}: loaded {} entries", path, source.len());

    Ok(Some(source))
}

/// Load sources in order, skipping missing ones.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<VocabularySource>, Error> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        if let Some(source) = load_source(path)? {
            sources.push(source);
        }
    }
    Ok(sources)
}
