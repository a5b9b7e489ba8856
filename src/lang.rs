//! Language tables.
//!
//! This module holds the per-language data the pipeline needs:
//! human-readable names (for corpus metadata), definite articles
//! (stripped before building identifiers and locating words) and
//! the transliterations applied when building identifiers.
//!
use std::collections::HashMap;

use lazy_static::lazy_static;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {

    /// English names of the languages the corpus is produced for.
    pub static ref LANG_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("ar", "Arabic");
        m.insert("de", "German");
        m.insert("en", "English");
        m.insert("es", "Spanish");
        m.insert("fa", "Persian");
        m.insert("fr", "French");
        m.insert("it", "Italian");
        m.insert("nl", "Dutch");
        m.insert("pl", "Polish");
        m.insert("pt", "Portuguese");
        m.insert("ru", "Russian");
        m.insert("tr", "Turkish");

        m
    };

    /// Definite articles that may prefix a vocabulary word.
    ///
    /// Only forms followed by a space are recognized: `l'` style elisions
    /// are left as part of the word.
    pub static ref ARTICLES: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("de", &["der", "die", "das"]);
        m.insert("nl", &["de", "het"]);
        m.insert("es", &["el", "la", "los", "las"]);
        m.insert("fr", &["le", "la", "les"]);
        m.insert("it", &["il", "lo", "la", "i", "gli", "le"]);
        m.insert("pt", &["o", "a", "os", "as"]);

        m
    };

    /// Characters replaced by an ASCII digraph in identifiers.
    pub static ref TRANSLITERATIONS: HashMap<char, &'static str> = {
        let mut m = HashMap::new();
        m.insert('ä', "ae");
        m.insert('ö', "oe");
        m.insert('ü', "ue");
        m.insert('ß', "ss");
        m.insert('æ', "ae");
        m.insert('œ', "oe");

        m
    };
}

/// Get the english name of a language, falling back on the code itself.
pub fn lang_name(code: &str) -> &str {
    LANG_NAMES.get(code).copied().unwrap_or(code)
}

/// Articles recognized for `lang`. Unknown languages have none.
pub fn articles(lang: &str) -> &'static [&'static str] {
    ARTICLES.get(lang).copied().unwrap_or(&[])
}

/// Remove a leading definite article from `word`.
///
/// The article has to be a separate, space-delimited token, and is matched
/// case-insensitively (`Die Besprechung` and `die Besprechung` both yield `Besprechung`).
pub fn strip_article<'a>(word: &'a str, lang: &str) -> &'a str {
    let word = word.trim();
    if let Some((head, tail)) = word.split_once(char::is_whitespace) {
        let head = head.to_lowercase();
        if articles(lang).iter().any(|article| *article == head) {
            return tail.trim_start();
        }
    }
    word
}

/// Check that `code` is a well-formed BCP-47 tag and return its primary language subtag.
pub fn primary_language(code: &str) -> Result<String, Error> {
    let tag = LanguageTag::parse(code.to_string())?;
    Ok(tag.primary_language().to_lowercase())
}
