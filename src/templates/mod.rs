/*! Template sentence generation

Offline replacement for the oracle: sentences are built from the hand-written templates of [table::TEMPLATES],
picked uniformly at random for a (language, domain) pair.

The random source is injected, so that a seeded generator always produces the same sentences.
!*/
pub mod table;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{Difficulty, RawSentence, VocabularyEntry};

use table::{generic_sentence, lookup};

pub struct TemplateGenerator<R: Rng> {
    rng: R,
}

impl TemplateGenerator<StdRng> {
    /// Generator with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TemplateGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Whether a template exists for the pair.
    pub fn has_templates(lang: &str, domain: &str) -> bool {
        lookup(lang, domain).is_some()
    }

    /// Fill a random template of (`lang`, `domain`).
    ///
    /// Unknown pairs yield [generic_sentence].
    pub fn fill(&mut self, lang: &str, domain: &str, word: &str, translation: &str) -> String {
        match lookup(lang, domain)
            .and_then(|templates| templates.choose(&mut self.rng))
        {
            Some(template) => render(template, word, translation),
            None => {
                debug!("[{}] no template for domain {:?}", lang, domain);
                generic_sentence(word)
            }
        }
    }

    /// Generate a single sentence in `lang` for `entry`.
    ///
    /// The translation is looked up in `translation_lang`, falling back on the first
    /// available translation, then on the word itself.
    pub fn sentence_for(
        &mut self,
        entry: &VocabularyEntry,
        lang: &str,
        domain: &str,
        translation_lang: &str,
    ) -> RawSentence {
        let translation = entry
            .translation_or_first(translation_lang)
            .unwrap_or(&entry.word)
            .to_string();
        let sentence = self.fill(lang, domain, &entry.word, &translation);
        raw(sentence, domain)
    }

    /// Generate `count` sentences for `entry`, using distinct templates as long as there are enough.
    pub fn sentences_for(
        &mut self,
        entry: &VocabularyEntry,
        lang: &str,
        domain: &str,
        translation_lang: &str,
        count: usize,
    ) -> Vec<RawSentence> {
        let templates = match lookup(lang, domain) {
            Some(t) => t,
            None => {
                return (0..count)
                    .map(|_| self.sentence_for(entry, lang, domain, translation_lang))
                    .collect()
            }
        };
        let translation = entry
            .translation_or_first(translation_lang)
            .unwrap_or(&entry.word)
            .to_string();

        let mut picked: Vec<&str> = templates
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();
        while picked.len() < count {
            if let Some(t) = templates.choose(&mut self.rng) {
                picked.push(*t);
            }
        }

        picked
            .into_iter()
            .map(|template| raw(render(template, &entry.word, &translation), domain))
            .collect()
    }
}

fn render(template: &str, word: &str, translation: &str) -> String {
    template
        .replace("{word}", word)
        .replace("{translation}", translation)
}

fn raw(sentence: String, domain: &str) -> RawSentence {
    let mut raw = RawSentence::new(&sentence);
    raw.difficulty = Some(Difficulty::Basic);
    raw.domain = Some(domain.to_string());
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> VocabularyEntry {
        VocabularyEntry::new("die Besprechung")
            .with_translation("pl", "spotkanie")
            .with_translation("en", "meeting")
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = TemplateGenerator::seeded(42);
        let mut b = TemplateGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.sentence_for(&entry(), "de", "urban_planning", "en"),
                b.sentence_for(&entry(), "de", "urban_planning", "en")
            );
        }
    }

    #[test]
    fn word_and_translation_are_present() {
        let mut g = TemplateGenerator::seeded(7);
        let s = g.sentence_for(&entry(), "de", "gastronomy", "en");
        assert!(s.sentence.contains("die Besprechung"));
        assert!(s.sentence.contains("meeting"));
        assert!(!s.sentence.contains('{'));
        assert_eq!(s.domain.as_deref(), Some("gastronomy"));
    }

    #[test]
    fn translation_falls_back_on_first() {
        let mut g = TemplateGenerator::seeded(7);
        let s = g.sentence_for(&entry(), "de", "general", "fa");
        assert!(s.sentence.contains("spotkanie"));
    }

    #[test]
    fn unknown_pair_is_generic() {
        let mut g = TemplateGenerator::seeded(1);
        let s = g.fill("ja", "astronomy", "星", "star");
        assert_eq!(s, generic_sentence("星"));
        assert!(!TemplateGenerator::<StdRng>::has_templates("ja", "astronomy"));
    }

    #[test]
    fn distinct_templates_when_possible() {
        let mut g = TemplateGenerator::seeded(3);
        let sentences = g.sentences_for(&entry(), "de", "urban_planning", "en", 3);
        assert_eq!(sentences.len(), 3);
        let mut texts: Vec<&str> = sentences.iter().map(|s| s.sentence.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 3);

        let more = g.sentences_for(&entry(), "en", "gastronomy", "en", 5);
        assert_eq!(more.len(), 5);
    }
}
