//! Example back-fill pipeline.
//!
//! Reads a vocabulary source, adds template examples for the requested languages
//! and writes it back with the same shape.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::{load_source, write_json};
use crate::lang::primary_language;
use crate::processing::{Backfill, BackfillStats};
use crate::templates::TemplateGenerator;

use super::Pipeline;

pub struct BackfillPipeline {
    src: PathBuf,
    dst: PathBuf,
    languages: Vec<String>,
    domain: String,
    seed: u64,
    count: usize,
}

impl BackfillPipeline {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        languages: &[String],
        domain: &str,
        seed: u64,
        count: usize,
    ) -> Result<Self, Error> {
        let languages = languages
            .iter()
            .map(|lang| primary_language(lang))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            src,
            dst,
            languages,
            domain: domain.to_string(),
            seed,
            count,
        })
    }
}

impl Pipeline<BackfillStats> for BackfillPipeline {
    fn run(&self) -> Result<BackfillStats, Error> {
        let mut source = load_source(&self.src)?
            .ok_or_else(|| Error::Custom(format!("{:?} not found", self.src)))?;

        let mut backfill = Backfill::new(
            TemplateGenerator::seeded(self.seed),
            &self.languages,
            &self.domain,
            self.count,
        );
        let stats = backfill.fill_all(source.entries_mut());

        write_json(&self.dst, &source)?;
        info!("back-filled vocabulary written to {:?}", self.dst);
        Ok(stats)
    }
}
