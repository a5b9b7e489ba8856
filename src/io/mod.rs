/*!
# IO utilities

Whole-file JSON reading and writing, and vocabulary source loading.

Every file of the pipeline is read entirely, transformed in memory and rewritten entirely:
there is no streaming and no concurrent writer.
!*/
mod json;
mod sources;

pub use json::{read_json, read_value, write_json};
pub use sources::{load_source, load_sources, VocabularySource};
