/*! Generation oracle

The oracle is the external text generation service used to translate strings and write example sentences.
Everything talking to it goes through the [Oracle] trait, so that tests (and offline runs) can substitute it.

[adapter::GenerationAdapter] is the batching layer: it builds prompts, parses answers,
retries through a [RetryPolicy] and maps results back to their inputs.
A failed batch only fails its own items, which become [Generation::Failed].
!*/
pub mod adapter;
pub mod http;
pub mod response;
pub mod retry;

use std::fmt;

use crate::config::constants::FAILURE_MARKER;
use crate::error::Error;

pub use adapter::{GenerationAdapter, SentenceRequest, SentenceSpec};
pub use http::HttpOracle;
pub use response::{parse_object, strip_fences};
pub use retry::{NoSleep, RetryPolicy, Sleeper, ThreadSleeper};

/// Prompt in, free text out.
pub trait Oracle {
    fn complete(&self, prompt: &str) -> Result<String, Error>;
}

impl<T: Oracle + ?Sized> Oracle for Box<T> {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        (**self).complete(prompt)
    }
}

/// Outcome of a single item sent to the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Generated(String),
    Failed { original: String, reason: String },
}

impl Generation {
    pub fn failed(original: &str, reason: &str) -> Self {
        Generation::Failed {
            original: original.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Generation::Failed { .. })
    }

    /// Value to write out: the generated string, or the failure marker wrapping the original.
    pub fn value(&self) -> String {
        match self {
            Generation::Generated(s) => s.clone(),
            Generation::Failed { original, .. } => format!("[{}: {}]", FAILURE_MARKER, original),
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_marker() {
        let g = Generation::failed("Guten Tag", "timeout");
        assert!(g.is_failed());
        assert_eq!(g.value(), "[TRANSLATION ERROR: Guten Tag]");
        assert_eq!(Generation::Generated("Hello".to_string()).to_string(), "Hello");
    }
}
