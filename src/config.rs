/*! Configuration

Every tunable of the pipeline lives in [Config], which is passed to the components that need it.
Fixed schema expectations (required languages, required fields) are in [constants],
so that the validator and the builders share a single definition.

A [Config] can be loaded from a TOML file; missing sections and keys take their default value:

```toml
[corpus]
language = "de"
translation_language = "en"
domains = ["urban_planning", "gastronomy"]

[oracle]
model = "gpt-4o-mini"
cooldown_ms = 500
```
!*/
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::error::Error;
use crate::lang;
use crate::oracle::RetryPolicy;
use crate::processing::MergeStrategy;

pub mod constants {
    /// Placeholder replacing the target word in blanked sentences.
    pub const PLACEHOLDER: &str = "_____";

    /// Prefix of the value substituted for an item the oracle failed to produce.
    pub const FAILURE_MARKER: &str = "TRANSLATION ERROR";

    /// Languages every universal vocabulary entry has to cover.
    pub const REQUIRED_LANGUAGES: [&str; 9] = ["en", "de", "es", "fr", "it", "pt", "pl", "fa", "ar"];

    /// Fields every universal vocabulary entry has to carry.
    pub const REQUIRED_FIELDS: [&str; 10] = [
        "id",
        "word",
        "category",
        "frequency_rank",
        "level",
        "translations",
        "explanation",
        "examples",
        "conjugations",
        "cefrLevel",
    ];

    /// Fields holding one value per required language.
    pub const PER_LANGUAGE_FIELDS: [&str; 3] = ["translations", "explanation", "examples"];

    pub const CORPUS_VERSION: &str = "1.0.0";
    pub const GENERATOR: &str = "lexicorpus";
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub batch: BatchConfig,
    pub oracle: OracleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// language of the vocabulary words and of the generated sentences.
    pub language: String,
    /// language sentence translations are requested in.
    pub translation_language: String,
    pub domains: Vec<String>,
    pub sentences_per_word: usize,
    pub version: String,
    pub generator: String,
    pub notes: String,
    /// what to do when two partial files provide sentences for the same word
    pub merge_strategy: MergeStrategy,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            translation_language: "en".to_string(),
            domains: vec!["general".to_string()],
            sentences_per_word: 3,
            version: constants::CORPUS_VERSION.to_string(),
            generator: constants::GENERATOR.to_string(),
            notes: String::new(),
            merge_strategy: MergeStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// maximum number of words in a batch
    pub chunk_size: usize,
    /// number of words a universal vocabulary batch file has to hold
    pub expected_words: usize,
    /// number of examples per language in universal vocabulary batches
    pub expected_examples: usize,
    /// CEFR level universal vocabulary batches are tagged with
    pub level: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: 30,
            expected_words: 20,
            expected_examples: 3,
            level: "A1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// OpenAI-compatible chat completions endpoint
    pub endpoint: String,
    pub model: String,
    /// name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    /// pause after each request
    pub cooldown_ms: u64,
    pub max_attempts: u32,
    pub backoff_ms: u64,
    pub timeout_secs: u64,
    /// number of strings sent in a single translation request
    pub translation_batch_size: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.7,
            cooldown_ms: 1000,
            max_attempts: 3,
            backoff_ms: 2000,
            timeout_secs: 120,
            translation_batch_size: 20,
        }
    }
}

impl OracleConfig {
    pub fn endpoint_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&self.endpoint)?)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.backoff_ms))
    }
}

impl Config {
    /// Load configuration from a TOML file and check it.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    /// Load from `path` if provided, use defaults otherwise.
    pub fn from_optional_path(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    /// Check that values are usable.
    pub fn check(&self) -> Result<(), Error> {
        lang::primary_language(&self.corpus.language)?;
        lang::primary_language(&self.corpus.translation_language)?;
        self.oracle.endpoint_url()?;

        if self.batch.chunk_size == 0 {
            return Err(Error::Config("batch.chunk_size must be positive".to_string()));
        }
        if self.oracle.translation_batch_size == 0 {
            return Err(Error::Config(
                "oracle.translation_batch_size must be positive".to_string(),
            ));
        }
        if self.oracle.max_attempts == 0 {
            return Err(Error::Config("oracle.max_attempts must be positive".to_string()));
        }
        if self.corpus.sentences_per_word == 0 {
            return Err(Error::Config(
                "corpus.sentences_per_word must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
