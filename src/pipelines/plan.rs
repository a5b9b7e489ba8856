//! Batch plan pipeline.
//!
//! Reads one vocabulary source per profile and writes how their words are split into batches.
use std::path::PathBuf;

use log::{info, warn};

use crate::error::Error;
use crate::io::{load_source, write_json};
use crate::processing::{dedup_stable, BatchPlan};

use super::Pipeline;

pub struct PlanPipeline {
    /// profile name and vocabulary source of each profile
    profiles: Vec<(String, PathBuf)>,
    dst: PathBuf,
    chunk_size: usize,
}

impl PlanPipeline {
    pub fn new(profiles: Vec<(String, PathBuf)>, dst: PathBuf, chunk_size: usize) -> Self {
        Self {
            profiles,
            dst,
            chunk_size,
        }
    }
}

impl Pipeline<BatchPlan> for PlanPipeline {
    fn run(&self) -> Result<BatchPlan, Error> {
        let mut plan = BatchPlan::new();

        for (profile, path) in &self.profiles {
            let source = match load_source(path)? {
                Some(source) => source,
                None => {
                    warn!("[{}] no vocabulary, profile not planned", profile);
                    continue;
                }
            };
            let words = dedup_stable(source.into_entries().into_iter().map(|entry| entry.word));
            plan.add_profile(profile, &words, self.chunk_size)?;
        }

        write_json(&self.dst, &plan)?;
        info!("batch plan written to {:?}", self.dst);
        Ok(plan)
    }
}
