//! Batch validation pipeline.
use std::path::{Path, PathBuf};

use glob::glob;
use log::{debug, info};

use crate::config::BatchConfig;
use crate::error::Error;
use crate::processing::{BatchValidator, ValidationSummary};

use super::Pipeline;

pub struct ValidatePipeline {
    dir: PathBuf,
    first: usize,
    last: usize,
    expected: BatchConfig,
}

impl ValidatePipeline {
    pub fn new(dir: PathBuf, first: usize, last: usize, expected: BatchConfig) -> Result<Self, Error> {
        if first > last {
            return Err(Error::Config(format!(
                "empty batch range: {}..={}",
                first, last
            )));
        }
        Ok(Self {
            dir,
            first,
            last,
            expected,
        })
    }
}

/// Highest batch number of the `batch_NN.json` files found in `dir`.
pub fn highest_batch(dir: &Path) -> Result<Option<usize>, Error> {
    let pattern = dir.join("batch_*.json");
    let mut highest = None;
    for path in glob(&pattern.to_string_lossy())? {
        let path = path?;
        let number = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.strip_prefix("batch_"))
            .and_then(|n| n.parse::<usize>().ok());
        match number {
            Some(n) => highest = highest.max(Some(n)),
            None => debug!("ignoring {:?}", path),
        }
    }
    Ok(highest)
}

impl Pipeline<ValidationSummary> for ValidatePipeline {
    /// Never fails on bad batches: they are reported in the summary.
    fn run(&self) -> Result<ValidationSummary, Error> {
        info!(
            "validating batches {} to {} in {:?}",
            self.first, self.last, self.dir
        );
        let validator = BatchValidator::new(&self.dir, &self.expected);
        Ok(validator.validate_range(self.first, self.last))
    }
}
