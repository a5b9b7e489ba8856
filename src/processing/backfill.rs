/*! Example back-fill

Vocabulary entries curated for a subset of languages lack usage examples for the others.
[Backfill] adds template-generated examples for the requested languages,
using the entry's translation in that language as the word to showcase.

Only missing or short example lists are touched: existing examples are never replaced.
!*/
use log::{debug, info, warn};
use rand::Rng;

use crate::templates::TemplateGenerator;
use crate::types::VocabularyEntry;

pub struct Backfill<R: Rng> {
    generator: TemplateGenerator<R>,
    languages: Vec<String>,
    domain: String,
    /// number of examples a language should have
    count: usize,
}

/// What a back-fill run changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BackfillStats {
    pub entries: usize,
    pub filled: usize,
    /// entries that had no translation in one of the languages
    pub untranslated: Vec<String>,
}

impl<R: Rng> Backfill<R> {
    pub fn new(generator: TemplateGenerator<R>, languages: &[String], domain: &str, count: usize) -> Self {
        Self {
            generator,
            languages: languages.to_vec(),
            domain: domain.to_string(),
            count,
        }
    }

    /// Fill the examples of a single entry. Returns the number of added examples.
    ///
    /// The entry is left untouched if a language to fill has no translation, which is returned as error.
    pub fn fill_entry(&mut self, entry: &mut VocabularyEntry) -> Result<usize, String> {
        if let Some(lang) = self.languages.iter().find(|lang| {
            entry.examples.get(*lang).map_or(0, Vec::len) < self.count
                && !entry.translations.contains_key(*lang)
        }) {
            return Err(lang.clone());
        }

        let mut added = 0;

        for lang in &self.languages {
            let present = entry.examples.get(lang).map_or(0, Vec::len);
            if present >= self.count {
                continue;
            }

            // the showcased word is the translation in `lang`, the original word is its gloss
            let localized = match entry.translations.get(lang) {
                Some(t) => t.clone(),
                None => return Err(lang.clone()),
            };
            let gloss = entry.word.clone();

            let examples = entry.examples.entry(lang.clone()).or_default();
            for _ in present..self.count {
                let sentence = self
                    .generator
                    .fill(lang, &self.domain, &localized, &gloss);
                examples.push(sentence);
                added += 1;
            }
            debug!("[{}] filled {} examples for {:?}", lang, self.count - present, entry.word);
        }

        Ok(added)
    }

    /// Fill every entry, reporting entries lacking a translation.
    pub fn fill_all<'e>(
        &mut self,
        entries: impl IntoIterator<Item = &'e mut VocabularyEntry>,
    ) -> BackfillStats {
        let mut stats = BackfillStats::default();

        for entry in entries {
            stats.entries += 1;
            match self.fill_entry(entry) {
                Ok(added) => stats.filled += added,
                Err(lang) => {
                    warn!("[{}] no translation for {:?}, examples not filled", lang, entry.word);
                    stats.untranslated.push(entry.word.clone());
                }
            }
        }

        info!(
            "added {} examples over {} entries ({} without translation)",
            stats.filled,
            stats.entries,
            stats.untranslated.len()
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs() -> Vec<String> {
        vec!["pl".to_string(), "fa".to_string()]
    }

    fn entry() -> VocabularyEntry {
        let mut e = VocabularyEntry::new("die Besprechung")
            .with_translation("pl", "spotkanie")
            .with_translation("fa", "جلسه");
        e.examples.insert(
            "pl".to_string(),
            vec!["Mamy dziś spotkanie.".to_string()],
        );
        e.examples.insert(
            "en".to_string(),
            vec!["We have a meeting.".to_string(), "The meeting ran late.".to_string()],
        );
        e
    }

    #[test]
    fn fills_missing_only() {
        let mut b = Backfill::new(TemplateGenerator::seeded(5), &langs(), "general", 2);
        let mut e = entry();

        assert_eq!(b.fill_entry(&mut e), Ok(3));
        assert_eq!(e.examples["pl"].len(), 2);
        assert_eq!(e.examples["pl"][0], "Mamy dziś spotkanie.");
        assert!(e.examples["pl"][1].contains("spotkanie"));
        assert_eq!(e.examples["fa"].len(), 2);
        assert!(e.examples["fa"].iter().all(|s| s.contains("جلسه")));
        assert_eq!(e.examples["en"].len(), 2);

        // second run has nothing left to do
        assert_eq!(b.fill_entry(&mut e), Ok(0));
    }

    #[test]
    fn missing_translation_is_reported() {
        let mut b = Backfill::new(TemplateGenerator::seeded(5), &langs(), "general", 2);
        let mut entries = vec![entry(), VocabularyEntry::new("der Park")];
        let stats = b.fill_all(&mut entries);

        assert_eq!(stats.entries, 2);
        assert_eq!(stats.filled, 3);
        assert_eq!(stats.untranslated, vec!["der Park".to_string()]);
    }
}
