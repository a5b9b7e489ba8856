//! Vocabulary entries.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One learnable word with its multilingual data.
///
/// Maps are [IndexMap]s so that language order survives a read/write cycle,
/// and fields that are not known here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// may include a leading article (`die Besprechung`)
    pub word: String,
    #[serde(default)]
    pub translations: IndexMap<String, String>,
    #[serde(default)]
    pub explanation: IndexMap<String, String>,
    #[serde(default)]
    pub examples: IndexMap<String, Vec<String>>,
    /// only present for verbs
    #[serde(default)]
    pub conjugations: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl VocabularyEntry {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            translations: IndexMap::new(),
            explanation: IndexMap::new(),
            examples: IndexMap::new(),
            conjugations: None,
            extra: IndexMap::new(),
        }
    }

    /// Translation in `lang`, or the first available one.
    pub fn translation_or_first(&self, lang: &str) -> Option<&str> {
        self.translations
            .get(lang)
            .or_else(|| self.translations.values().next())
            .map(String::as_str)
    }

    pub fn with_translation(mut self, lang: &str, translation: &str) -> Self {
        self.translations
            .insert(lang.to_string(), translation.to_string());
        self
    }
}
