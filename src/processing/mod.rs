/*! Corpus processing

Merging sources, planning batches, combining partial outputs into corpus documents,
back-filling examples and validating universal vocabulary batches.
!*/
pub mod backfill;
pub mod combine;
pub mod merge;
pub mod plan;
pub mod validate;

pub use backfill::{Backfill, BackfillStats};
pub use combine::{Combiner, PartialCorpus};
pub use merge::{dedup_stable, merge_maps, merge_sources, MergeStrategy};
pub use plan::{chunk, BatchPlan, ProfilePlan};
pub use validate::{BatchReport, BatchStatus, BatchValidator, ValidationSummary};
