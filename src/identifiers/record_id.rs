//! Id schemes for sentence records.
use std::collections::{HashMap, HashSet};

use log::warn;
use serde::{Deserialize, Serialize};

use super::normalize;

/// How sentence record ids are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// `{lang}_{slug}_{index:03}`, index being the 1-based position of the sentence for its word.
    WordIndexed,
    /// `{lang}-{n:04}`, n being a 1-based counter over the whole corpus.
    Sequential,
}

/// Id factory for a single corpus.
///
/// Holds the counter used by [IdScheme::Sequential], and the slug given to each word.
/// Distinct words normalizing to the same slug (`der See` and `die See`) get
/// a numbered slug (`see_2`) in order of appearance, so that ids stay unique.
#[derive(Debug)]
pub struct RecordIds {
    scheme: IdScheme,
    lang: String,
    counter: usize,
    /// word → slug used in its ids
    slugs: HashMap<String, String>,
    taken: HashSet<String>,
}

impl RecordIds {
    pub fn new(scheme: IdScheme, lang: &str) -> Self {
        Self {
            scheme,
            lang: lang.to_string(),
            counter: 0,
            slugs: HashMap::new(),
            taken: HashSet::new(),
        }
    }

    /// Slug of `word`, unique among the words seen so far.
    fn slug(&mut self, word: &str) -> String {
        if let Some(slug) = self.slugs.get(word) {
            return slug.clone();
        }

        let base = normalize(word, &self.lang);
        let mut slug = base.clone();
        let mut n = 1;
        while self.taken.contains(&slug) {
            n += 1;
            slug = format!("{}_{}", base, n);
        }
        if n > 1 {
            warn!(
                "[{}] {:?} has the same identifier as a previous word, using {:?}",
                self.lang, word, slug
            );
        }

        self.taken.insert(slug.clone());
        self.slugs.insert(word.to_string(), slug.clone());
        slug
    }

    /// Id of the `index`-th (1-based) sentence of `word`.
    pub fn next_id(&mut self, word: &str, index: usize) -> String {
        self.counter += 1;
        match self.scheme {
            IdScheme::WordIndexed => {
                let slug = self.slug(word);
                format!("{}_{}_{:03}", self.lang, slug, index)
            }
            IdScheme::Sequential => format!("{}-{:04}", self.lang, self.counter),
        }
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_indexed() {
        let mut ids = RecordIds::new(IdScheme::WordIndexed, "de");
        assert_eq!(ids.next_id("die Besprechung", 1), "de_besprechung_001");
        assert_eq!(ids.next_id("die Besprechung", 12), "de_besprechung_012");
    }

    #[test]
    fn colliding_slugs_are_numbered() {
        let mut ids = RecordIds::new(IdScheme::WordIndexed, "de");
        assert_eq!(ids.next_id("der See", 1), "de_see_001");
        assert_eq!(ids.next_id("die See", 1), "de_see_2_001");
        assert_eq!(ids.next_id("der See", 2), "de_see_002");
        assert_eq!(ids.next_id("die See", 2), "de_see_2_002");
        assert_eq!(ids.next_id("die Straße", 1), "de_strasse_001");
        assert_eq!(ids.next_id("die Strasse", 1), "de_strasse_2_001");
    }

    #[test]
    fn sequential() {
        let mut ids = RecordIds::new(IdScheme::Sequential, "pl");
        assert_eq!(ids.next_id("dom", 1), "pl-0001");
        assert_eq!(ids.next_id("dom", 2), "pl-0002");
        assert_eq!(ids.next_id("kot", 1), "pl-0003");
    }
}
