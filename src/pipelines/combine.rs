//! Corpus combining pipeline.
//!
//! Inputs are paths or glob patterns of partial corpora.
//! Every input is read before anything is written, so that a structurally broken partial file
//! leaves the destination untouched.
use std::path::PathBuf;

use glob::glob;
use log::{debug, info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::identifiers::IdScheme;
use crate::io::write_json;
use crate::processing::{Combiner, PartialCorpus};
use crate::types::CorpusDocument;

use super::Pipeline;

pub struct CombinePipeline {
    inputs: Vec<String>,
    dst: PathBuf,
    profiles: Vec<String>,
    config: Config,
    scheme: IdScheme,
}

impl CombinePipeline {
    pub fn new(inputs: Vec<String>, dst: PathBuf, profiles: Vec<String>, config: Config) -> Self {
        Self {
            inputs,
            dst,
            profiles,
            config,
            scheme: IdScheme::WordIndexed,
        }
    }

    pub fn with_scheme(mut self, scheme: IdScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Expand glob patterns, keeping input order. Patterns matching nothing are reported.
    fn paths(&self) -> Result<Vec<PathBuf>, Error> {
        let mut paths = Vec::new();
        for input in &self.inputs {
            let mut matched = glob(input)?.collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;
            if matched.is_empty() {
                warn!("{:?} matches no file", input);
            }
            matched.sort();
            debug!("{:?} → {:?}", input, matched);
            paths.extend(matched);
        }
        Ok(paths)
    }
}

impl Pipeline<CorpusDocument> for CombinePipeline {
    fn run(&self) -> Result<CorpusDocument, Error> {
        let partials = self
            .paths()?
            .iter()
            .map(|path| PartialCorpus::from_path(path))
            .collect::<Result<Vec<_>, Error>>()?;
        info!("combining {} partial files", partials.len());

        let corpus = Combiner::new(&self.config)
            .with_scheme(self.scheme)
            .combine(partials, &self.profiles);

        write_json(&self.dst, &corpus)?;
        info!("corpus written to {:?}", self.dst);
        Ok(corpus)
    }
}
