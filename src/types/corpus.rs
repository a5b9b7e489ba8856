//! Corpus document: metadata and sentence records grouped by word.
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SentenceRecord;

/// A raw entry that could not be turned into a [SentenceRecord].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub word: String,
    /// position of the entry in the word's list, if the list itself was readable
    pub position: Option<usize>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusMetadata {
    pub language: String,
    pub language_name: String,
    pub profiles: Vec<String>,
    pub source_files: Vec<String>,
    pub total_words: usize,
    pub total_sentences: usize,
    pub generated: NaiveDate,
    pub version: String,
    pub generator: String,
    pub domains: Vec<String>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub metadata: CorpusMetadata,
    pub sentences: IndexMap<String, Vec<SentenceRecord>>,
}

impl CorpusDocument {
    /// Number of sentences over all words.
    pub fn count_sentences(&self) -> usize {
        self.sentences.values().map(Vec::len).sum()
    }

    /// Whether the metadata totals match the sentence map.
    pub fn totals_consistent(&self) -> bool {
        self.metadata.total_words == self.sentences.len()
            && self.metadata.total_sentences == self.count_sentences()
    }
}
