/*! Sentence transformers.

Locate vocabulary words in sentences, and turn raw sentences into blanked [crate::types::SentenceRecord]s.

!*/

mod locate;
mod record;
mod tokens;

pub use locate::{locate, Location};
pub use record::{blank_sentence, BuildContext, RecordBuilder};
pub use tokens::{strip_punctuation, tokens, PUNCTUATION};
