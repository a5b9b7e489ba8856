/*! Record identifiers

Sentence record ids are derived from the vocabulary word through [normalize],
which has to stay stable across runs: regenerating a corpus must yield the same ids.
!*/
mod record_id;
mod slug;

pub use record_id::{IdScheme, RecordIds};
pub use slug::normalize;
