//! Sentence record building.
use log::debug;

use crate::config::constants::PLACEHOLDER;
use crate::identifiers::{IdScheme, RecordIds};
use crate::lang::strip_article;
use crate::types::{Difficulty, RawSentence, SentenceRecord};

use super::locate::{locate, Location};
use super::tokens::{tokens, PUNCTUATION};

/// Values applied to every record built by a [RecordBuilder],
/// unless the raw sentence overrides them.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub language: String,
    pub domain: String,
    pub difficulty: Difficulty,
    pub translation_language: Option<String>,
}

impl BuildContext {
    pub fn new(language: &str, domain: &str) -> Self {
        Self {
            language: language.to_string(),
            domain: domain.to_string(),
            difficulty: Difficulty::default(),
            translation_language: None,
        }
    }
}

pub struct RecordBuilder {
    context: BuildContext,
    ids: RecordIds,
}

impl RecordBuilder {
    pub fn new(context: BuildContext, scheme: IdScheme) -> Self {
        let ids = RecordIds::new(scheme, &context.language);
        Self { context, ids }
    }

    /// Build the `index`-th (1-based) sentence record of `word`.
    pub fn build(&mut self, word: &str, raw: &RawSentence, index: usize) -> SentenceRecord {
        let lang = self.context.language.as_str();
        let location = locate(&raw.sentence, word, lang);
        if location == Location::NotFound {
            debug!("[{}] could not locate {:?} in {:?}", lang, word, raw.sentence);
        }
        let blank = blank_sentence(&raw.sentence, word, lang, location);

        let translation_language = raw
            .translation
            .as_ref()
            .and(self.context.translation_language.clone());

        SentenceRecord {
            id: self.ids.next_id(word, index),
            full: raw.sentence.clone(),
            blank,
            target_word: word.to_string(),
            target_index: location.index(),
            translation: raw.translation.clone(),
            translation_language,
            vocabulary_used: raw.vocabulary_used.clone(),
            difficulty: raw.difficulty.unwrap_or(self.context.difficulty),
            domain: raw
                .domain
                .clone()
                .unwrap_or_else(|| self.context.domain.clone()),
        }
    }

    pub fn context(&self) -> &BuildContext {
        &self.context
    }
}

/// Replace the located token of `full` by [PLACEHOLDER].
///
/// Only the word part of the token is replaced: surrounding punctuation and whitespace are kept.
/// If the word was not located (or the index is out of bounds, or the token is only punctuation),
/// the first literal occurrence of the bare word is replaced instead, which may leave `full` unchanged.
pub fn blank_sentence(full: &str, word: &str, lang: &str, location: Location) -> String {
    let located = location
        .index()
        .and_then(|idx| tokens(full).get(idx).copied())
        .filter(|(_, token)| !token.trim_matches(PUNCTUATION).is_empty());

    match located {
        Some((offset, token)) => {
            let lead = token.len() - token.trim_start_matches(PUNCTUATION).len();
            let core = token.trim_matches(PUNCTUATION);
            let start = offset + lead;
            let end = start + core.len();

            let mut blank = String::with_capacity(full.len());
            blank.push_str(&full[..start]);
            blank.push_str(PLACEHOLDER);
            blank.push_str(&full[end..]);
            blank
        }
        None => {
            let bare = strip_article(word, lang);
            if bare.is_empty() {
                full.to_string()
            } else {
                full.replacen(bare, PLACEHOLDER, 1)
            }
        }
    }
}
