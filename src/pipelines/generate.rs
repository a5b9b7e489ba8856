/*! Sentence generation pipeline

Loads and merges vocabulary sources, then writes a partial corpus (word → raw sentences)
ready to be combined.

Sentences come either from the oracle, batch by batch, or from the template generator.
Domains are assigned to words in turn, unless a single domain is forced.
Words for which no sentence could be obtained are skipped and reported.
!*/
use std::path::PathBuf;

use indexmap::IndexMap;
use itertools::Itertools;
use log::{info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::io::{load_sources, write_json};
use crate::oracle::{GenerationAdapter, SentenceRequest, SentenceSpec};
use crate::processing::{chunk, merge_sources};
use crate::templates::TemplateGenerator;
use crate::types::{RawSentence, VocabularyEntry};

use super::Pipeline;

pub enum SentenceSource {
    /// offline generation, reproducible for a given seed
    Templates { seed: u64 },
    Oracle(GenerationAdapter),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub words: usize,
    pub sentences: usize,
    /// words left without sentences
    pub skipped: Vec<String>,
}

pub struct GeneratePipeline {
    sources: Vec<PathBuf>,
    dst: PathBuf,
    config: Config,
    source: SentenceSource,
    domain: Option<String>,
}

impl GeneratePipeline {
    pub fn new(sources: Vec<PathBuf>, dst: PathBuf, config: Config, source: SentenceSource) -> Self {
        Self {
            sources,
            dst,
            config,
            source,
            domain: None,
        }
    }

    /// Use `domain` for every word.
    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        self.domain = domain;
        self
    }

    fn domain_of(&self, position: usize) -> &str {
        if let Some(domain) = &self.domain {
            return domain;
        }
        let domains = &self.config.corpus.domains;
        if domains.is_empty() {
            "general"
        } else {
            &domains[position % domains.len()]
        }
    }

    fn spec(&self) -> SentenceSpec {
        SentenceSpec {
            language: self.config.corpus.language.clone(),
            translation_language: self.config.corpus.translation_language.clone(),
            count: self.config.corpus.sentences_per_word,
        }
    }

    fn from_templates(
        &self,
        seed: u64,
        entries: &[VocabularyEntry],
    ) -> IndexMap<String, Vec<RawSentence>> {
        let spec = self.spec();
        let mut generator = TemplateGenerator::seeded(seed);
        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let sentences = generator.sentences_for(
                    entry,
                    &spec.language,
                    self.domain_of(position),
                    &spec.translation_language,
                    spec.count,
                );
                (entry.word.clone(), sentences)
            })
            .collect()
    }

    fn from_oracle(
        &self,
        adapter: &GenerationAdapter,
        entries: &[VocabularyEntry],
    ) -> Result<IndexMap<String, Vec<RawSentence>>, Error> {
        let spec = self.spec();
        let requests: Vec<SentenceRequest> = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| SentenceRequest {
                entry,
                domain: self.domain_of(position),
            })
            .collect();

        let batches = chunk(&requests, self.config.batch.chunk_size)?;
        let nb_batches = batches.len();
        let mut out = IndexMap::new();

        for (batch_idx, batch) in batches.iter().enumerate() {
            info!(
                "[batch {}/{}] generating sentences for {} words",
                batch_idx + 1,
                nb_batches,
                batch.len()
            );
            let results = adapter.generate_sentences(batch, &spec)?;
            for (request, sentences) in batch.iter().zip(results) {
                if let Some(sentences) = sentences {
                    out.insert(request.entry.word.clone(), sentences);
                }
            }
        }

        Ok(out)
    }
}

impl Pipeline<GenerationReport> for GeneratePipeline {
    fn run(&self) -> Result<GenerationReport, Error> {
        let sources = load_sources(&self.sources)?;
        let entries: Vec<VocabularyEntry> = merge_sources(sources, self.config.corpus.merge_strategy)
            .into_iter()
            .unique_by(|entry| entry.word.clone())
            .collect();
        info!(
            "[{}] generating sentences for {} words",
            self.config.corpus.language,
            entries.len()
        );

        let partial = match &self.source {
            SentenceSource::Templates { seed } => self.from_templates(*seed, &entries),
            SentenceSource::Oracle(adapter) => self.from_oracle(adapter, &entries)?,
        };

        let skipped: Vec<String> = entries
            .iter()
            .filter(|entry| !partial.contains_key(&entry.word))
            .map(|entry| entry.word.clone())
            .collect();
        for word in &skipped {
            warn!("[{}] skipped {:?}: no sentence generated", self.config.corpus.language, word);
        }

        write_json(&self.dst, &partial)?;

        let report = GenerationReport {
            words: partial.len(),
            sentences: partial.values().map(Vec::len).sum(),
            skipped,
        };
        info!(
            "[{}] wrote {} sentences for {} words to {:?} ({} skipped)",
            self.config.corpus.language,
            report.sentences,
            report.words,
            self.dst,
            report.skipped.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_json;
    use crate::oracle::{NoSleep, Oracle};
    use serde_json::json;

    struct Fixed(&'static str);

    impl Oracle for Fixed {
        fn complete(&self, _: &str) -> Result<String, Error> {
            Ok(self.0.to_string())
        }
    }

    fn vocab(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("vocab.json");
        std::fs::write(
            &path,
            json!({
                "die Stadt": {"translations": {"en": "city"}},
                "der Park": {"translations": {"en": "park"}}
            })
            .to_string(),
        )
        .unwrap();
        path
    }

    #[test]
    fn templates_are_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let src = vocab(dir.path());
        let mut config = Config::default();
        config.corpus.domains = vec!["urban_planning".to_string(), "gastronomy".to_string()];

        let run = |name: &str| {
            let dst = dir.path().join(name);
            let report = GeneratePipeline::new(
                vec![src.clone()],
                dst.clone(),
                config.clone(),
                SentenceSource::Templates { seed: 11 },
            )
            .run()
            .unwrap();
            (report, read_json::<IndexMap<String, Vec<RawSentence>>>(&dst).unwrap())
        };

        let (report, a) = run("a.json");
        let (_, b) = run("b.json");
        assert_eq!(a, b);
        assert_eq!(report.words, 2);
        assert_eq!(report.sentences, 6);
        assert!(report.skipped.is_empty());
        assert_eq!(a["die Stadt"][0].domain.as_deref(), Some("urban_planning"));
        assert_eq!(a["der Park"][0].domain.as_deref(), Some("gastronomy"));
    }

    #[test]
    fn oracle_words_without_sentences_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let src = vocab(dir.path());
        let dst = dir.path().join("partial.json");
        let mut config = Config::default();
        config.oracle.cooldown_ms = 0;

        let oracle = Fixed(r#"{"0": {"sentences": [{"sentence": "Die Stadt wächst."}]}}"#);
        let adapter =
            GenerationAdapter::new(Box::new(oracle), &config.oracle).with_sleeper(Box::new(NoSleep));

        let report = GeneratePipeline::new(vec![src], dst.clone(), config, SentenceSource::Oracle(adapter))
            .with_domain(Some("general".to_string()))
            .run()
            .unwrap();

        assert_eq!(report.words, 1);
        assert_eq!(report.skipped, vec!["der Park".to_string()]);
        let partial: IndexMap<String, Vec<RawSentence>> = read_json(&dst).unwrap();
        assert_eq!(partial["die Stadt"][0].sentence, "Die Stadt wächst.");
    }
}
