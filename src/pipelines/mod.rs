//! Pipelines.
//!
//! Each command of the binary is a pipeline, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
//!
//! Pipelines read their inputs whole, transform them in memory and write their output whole.
pub mod backfill;
pub mod combine;
pub mod generate;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod plan;
pub mod translate;
pub mod validate;

pub use backfill::BackfillPipeline;
pub use combine::CombinePipeline;
pub use generate::{GeneratePipeline, GenerationReport, SentenceSource};
pub use pipeline::Pipeline;
pub use plan::PlanPipeline;
pub use translate::{TranslatePipeline, TranslationReport};
pub use validate::{highest_batch, ValidatePipeline};
