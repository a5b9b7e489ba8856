/*! Corpus combining

Partial outputs (word → list of raw sentences) are merged and built into a single [CorpusDocument].

Individual bad entries are skipped and listed in the corpus metadata;
a partial file that is not an object at all is an error, and nothing gets written.
!*/
use std::path::{Path, PathBuf};

use chrono::Local;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, warn};
use serde_json::Value;

use crate::config::Config;
use crate::error::Error;
use crate::identifiers::IdScheme;
use crate::io::read_value;
use crate::lang::lang_name;
use crate::transformers::{BuildContext, RecordBuilder};
use crate::types::{CorpusDocument, CorpusMetadata, RawSentence, SentenceRecord, SkippedEntry};

use super::merge::{merge_maps, MergeStrategy};

/// Raw sentences of one partial file, not yet validated.
#[derive(Debug, Clone)]
pub struct PartialCorpus {
    source: PathBuf,
    entries: IndexMap<String, Value>,
}

impl PartialCorpus {
    /// Accepts either a plain `word → sentences` object, or a document holding such an object
    /// under `sentences` (as produced by a previous combine).
    pub fn from_value(source: &Path, value: Value) -> Result<Self, Error> {
        let mut map = match value {
            Value::Object(map) => map,
            _ => {
                return Err(Error::Custom(format!(
                    "{:?}: partial corpus must be an object",
                    source
                )))
            }
        };

        if map.contains_key("metadata") && map.get("sentences").map_or(false, Value::is_object) {
            debug!("{:?}: reading sentences of a corpus document", source);
            if let Some(Value::Object(inner)) = map.remove("sentences") {
                map = inner;
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            entries: map.into_iter().collect(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_value(path, read_value(path)?)
    }

    pub fn from_entries(source: &Path, entries: IndexMap<String, Value>) -> Self {
        Self {
            source: source.to_path_buf(),
            entries,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct Combiner<'a> {
    config: &'a Config,
    strategy: MergeStrategy,
    scheme: IdScheme,
}

impl<'a> Combiner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            strategy: config.corpus.merge_strategy,
            scheme: IdScheme::WordIndexed,
        }
    }

    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_scheme(mut self, scheme: IdScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Merge `partials` and build the corpus document.
    pub fn combine(&self, partials: Vec<PartialCorpus>, profiles: &[String]) -> CorpusDocument {
        let corpus = &self.config.corpus;
        let source_files: Vec<String> = partials
            .iter()
            .map(|p| p.source.to_string_lossy().into_owned())
            .collect();

        let (merged, conflicts) =
            merge_maps(partials.into_iter().map(|p| p.entries), self.strategy);
        if !conflicts.is_empty() {
            info!(
                "{} words present in more than one partial file ({:?})",
                conflicts.len(),
                self.strategy
            );
        }

        let mut context = BuildContext::new(&corpus.language, &self.default_domain());
        context.translation_language = Some(corpus.translation_language.clone());
        let mut builder = RecordBuilder::new(context, self.scheme);

        let mut sentences: IndexMap<String, Vec<SentenceRecord>> = IndexMap::new();
        let mut skipped = Vec::new();

        for (word, value) in merged {
            let records = Self::build_word(&mut builder, &word, value, &mut skipped);
            if records.is_empty() {
                warn!("[{}] no usable sentence for {:?}", corpus.language, word);
                continue;
            }
            sentences.insert(word, records);
        }

        let domains: Vec<String> = sentences
            .values()
            .flatten()
            .map(|record| record.domain.clone())
            .unique()
            .collect();

        let metadata = CorpusMetadata {
            language: corpus.language.clone(),
            language_name: lang_name(&corpus.language).to_string(),
            profiles: profiles.to_vec(),
            source_files,
            total_words: sentences.len(),
            total_sentences: sentences.values().map(Vec::len).sum(),
            generated: Local::now().date_naive(),
            version: corpus.version.clone(),
            generator: corpus.generator.clone(),
            domains: if domains.is_empty() {
                corpus.domains.clone()
            } else {
                domains
            },
            notes: corpus.notes.clone(),
            skipped,
        };

        info!(
            "[{}] combined {} words, {} sentences ({} skipped entries)",
            metadata.language,
            metadata.total_words,
            metadata.total_sentences,
            metadata.skipped.len()
        );

        CorpusDocument {
            metadata,
            sentences,
        }
    }

    /// Build the records of a single word, pushing unusable entries into `skipped`.
    fn build_word(
        builder: &mut RecordBuilder,
        word: &str,
        value: Value,
        skipped: &mut Vec<SkippedEntry>,
    ) -> Vec<SentenceRecord> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                let reason = format!("expected a list of sentences, found {}", kind(&other));
                warn!("skipping {:?}: {}", word, reason);
                skipped.push(SkippedEntry {
                    word: word.to_string(),
                    position: None,
                    reason,
                });
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            let reason = match item {
                Value::Object(ref fields)
                    if !fields.contains_key("sentence") && !fields.contains_key("full") =>
                {
                    "missing field `sentence`".to_string()
                }
                Value::Object(_) => match serde_json::from_value::<RawSentence>(item) {
                    Ok(raw) => {
                        records.push(builder.build(word, &raw, position + 1));
                        continue;
                    }
                    Err(e) => e.to_string(),
                },
                other => format!("expected an object, found {}", kind(&other)),
            };

            warn!("skipping {:?} sentence {}: {}", word, position + 1, reason);
            skipped.push(SkippedEntry {
                word: word.to_string(),
                position: Some(position),
                reason,
            });
        }

        records
    }

    fn default_domain(&self) -> String {
        self.config
            .corpus
            .domains
            .first()
            .cloned()
            .unwrap_or_else(|| "general".to_string())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
