//! # lexicorpus
//!
//! Builds multilingual vocabulary and example sentence corpora for language learning.
//!
//! Vocabulary sources are merged and split into batches, example sentences are obtained
//! from a text generation oracle (or from templates when working offline),
//! then built into sentence records with a blanked variant and combined into a corpus document.
//! Universal vocabulary batches can be validated against a fixed schema.
pub mod config;
pub mod error;
pub mod identifiers;
pub mod io;
pub mod lang;
pub mod oracle;
pub mod pipelines;
pub mod processing;
pub mod templates;
pub mod transformers;
pub mod types;
