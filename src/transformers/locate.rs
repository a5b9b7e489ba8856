//! Locating a vocabulary word in a sentence.
//!
//! Matching is done on whitespace tokens stripped of punctuation, lowercased,
//! and succeeds when either the token or the word contains the other.
//! This tolerates inflection (`Besprechungen` matches `Besprechung`) without a morphological analyzer,
//! at the price of false positives for short words, that can be contained in unrelated tokens.
use crate::lang::strip_article;

use super::tokens::{strip_punctuation, tokens};

/// Result of a word lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// 0-based token index
    Found(usize),
    NotFound,
}

impl Location {
    pub fn index(&self) -> Option<usize> {
        match self {
            Location::Found(idx) => Some(*idx),
            Location::NotFound => None,
        }
    }
}

/// Find the token of `sentence` where `word` (stripped of its `lang` article) occurs first.
pub fn locate(sentence: &str, word: &str, lang: &str) -> Location {
    let target = strip_article(word, lang).to_lowercase();
    if target.is_empty() {
        return Location::NotFound;
    }

    tokens(sentence)
        .iter()
        .position(|(_, token)| {
            let token = strip_punctuation(token).to_lowercase();
            !token.is_empty() && (token.contains(&target) || target.contains(&token))
        })
        .map_or(Location::NotFound, Location::Found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_article_and_punctuation() {
        let s = "Wir hatten heute eine wichtige Besprechung im Büro.";
        assert_eq!(locate(s, "die Besprechung", "de"), Location::Found(5));
    }

    #[test]
    fn inflected_form() {
        let s = "Die Besprechungen dauern oft zu lange.";
        assert_eq!(locate(s, "die Besprechung", "de"), Location::Found(1));
    }

    #[test]
    fn first_token() {
        let s = "Bahnhöfe sind laut.";
        assert_eq!(locate(s, "der Bahnhöfe", "de"), Location::Found(0));
        assert_eq!(locate(s, "der Bahnhöfe", "de").index(), Some(0));
    }

    #[test]
    fn not_found() {
        let s = "Wir gehen ins Kino.";
        assert_eq!(locate(s, "die Besprechung", "de"), Location::NotFound);
        assert_eq!(locate(s, "", "de"), Location::NotFound);
        assert_eq!(locate("", "Kino", "de"), Location::NotFound);
    }

    #[test]
    fn punctuation_only_tokens_are_skipped() {
        let s = "— Kino!";
        assert_eq!(locate(s, "das Kino", "de"), Location::Found(1));
    }

    #[test]
    fn short_word_false_positive() {
        // known limitation: "ei" is contained in "eine"
        let s = "Das ist eine Frage.";
        assert_eq!(locate(s, "das Ei", "de"), Location::Found(2));
    }
}
