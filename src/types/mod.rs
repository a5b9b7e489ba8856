/*! Corpus types.

Vocabulary entries are the input of the pipeline, sentence records and corpus documents its output.
!*/
mod corpus;
mod sentence;
mod vocabulary;

pub use corpus::{CorpusDocument, CorpusMetadata, SkippedEntry};
pub use sentence::{Difficulty, RawSentence, SentenceRecord};
pub use vocabulary::VocabularyEntry;
