//! Sentence records and their raw, unbuilt counterpart.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Difficulty {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Difficulty::Basic),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// A sentence as produced by the oracle, the template generator or found in a partial file.
///
/// Only `sentence` is mandatory. It can also be read from `full`,
/// so that already built records can be fed back to the combiner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSentence {
    #[serde(alias = "full")]
    pub sentence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default)]
    pub vocabulary_used: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl RawSentence {
    pub fn new(sentence: &str) -> Self {
        Self {
            sentence: sentence.to_string(),
            translation: None,
            vocabulary_used: Vec::new(),
            difficulty: None,
            domain: None,
        }
    }
}

/// One example sentence tied to a vocabulary word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub id: String,
    pub full: String,
    pub blank: String,
    pub target_word: String,
    /// token offset of the target word in `full`, `None` if it could not be located.
    pub target_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_language: Option<String>,
    pub vocabulary_used: Vec<String>,
    pub difficulty: Difficulty,
    pub domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_sentence_minimal() {
        let raw: RawSentence = serde_json::from_str(r#"{"sentence": "Das ist gut."}"#).unwrap();
        assert_eq!(raw, RawSentence::new("Das ist gut."));
    }

    #[test]
    fn raw_sentence_without_sentence_is_rejected() {
        let raw: Result<RawSentence, _> = serde_json::from_str(r#"{"translation": "hi"}"#);
        assert!(raw.is_err());
    }

    #[test]
    fn difficulty_names() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Advanced).unwrap(),
            "\"advanced\""
        );
        assert_eq!("basic".parse::<Difficulty>(), Ok(Difficulty::Basic));
        assert!("hard".parse::<Difficulty>().is_err());
    }
}
