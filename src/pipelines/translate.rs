//! Translation pipeline.
//!
//! Translates a JSON list of strings through the oracle. The output list is aligned with the input one:
//! strings that could not be translated hold the failure marker.
use std::path::PathBuf;

use log::{info, warn};

use crate::error::Error;
use crate::io::{read_json, write_json};
use crate::lang::primary_language;
use crate::oracle::{Generation, GenerationAdapter};

use super::Pipeline;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub items: usize,
    pub failed: usize,
}

pub struct TranslatePipeline {
    src: PathBuf,
    dst: PathBuf,
    from: String,
    to: String,
    adapter: GenerationAdapter,
}

impl TranslatePipeline {
    pub fn new(src: PathBuf, dst: PathBuf, from: &str, to: &str, adapter: GenerationAdapter) -> Result<Self, Error> {
        Ok(Self {
            src,
            dst,
            from: primary_language(from)?,
            to: primary_language(to)?,
            adapter,
        })
    }
}

impl Pipeline<TranslationReport> for TranslatePipeline {
    fn run(&self) -> Result<TranslationReport, Error> {
        let items: Vec<String> = read_json(&self.src)?;
        info!("[{}] translating {} strings to {}", self.from, items.len(), self.to);

        let generations = self.adapter.translate(&items, &self.from, &self.to)?;
        let failed = generations.iter().filter(|g| g.is_failed()).count();
        if failed > 0 {
            warn!("[{}] {} strings could not be translated", self.to, failed);
        }

        let values: Vec<String> = generations.iter().map(Generation::value).collect();
        write_json(&self.dst, &values)?;

        Ok(TranslationReport {
            items: items.len(),
            failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OracleConfig;
    use crate::oracle::{NoSleep, Oracle};

    /// Translates by upper-casing, fails on the batch holding "boom".
    struct Upper;

    impl Oracle for Upper {
        fn complete(&self, prompt: &str) -> Result<String, Error> {
            if prompt.contains("boom") {
                return Err(Error::Oracle("boom".to_string()));
            }
            let payload = &prompt[prompt.find('{').unwrap_or(0)..];
            let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(payload)?;
            let upper: serde_json::Map<String, serde_json::Value> = map
                .into_iter()
                .map(|(k, v)| (k, v.as_str().unwrap_or("").to_uppercase().into()))
                .collect();
            Ok(serde_json::Value::Object(upper).to_string())
        }
    }

    #[test]
    fn aligned_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.json");
        let dst = dir.path().join("dst.json");
        std::fs::write(&src, r#"["eins", "zwei", "boom", "vier"]"#).unwrap();

        let config = OracleConfig {
            translation_batch_size: 2,
            max_attempts: 1,
            cooldown_ms: 0,
            ..Default::default()
        };
        let adapter = GenerationAdapter::new(Box::new(Upper), &config).with_sleeper(Box::new(NoSleep));
        let report = TranslatePipeline::new(src, dst.clone(), "de", "en", adapter)
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(report, TranslationReport { items: 4, failed: 2 });
        let out: Vec<String> = read_json(&dst).unwrap();
        assert_eq!(
            out,
            vec![
                "EINS".to_string(),
                "ZWEI".to_string(),
                "[TRANSLATION ERROR: boom]".to_string(),
                "[TRANSLATION ERROR: vier]".to_string(),
            ]
        );
    }
}
