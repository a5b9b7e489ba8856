//! Oracle answer parsing.
//!
//! Models tend to wrap JSON in markdown code fences, with or without a language tag.
use serde_json::{Map, Value};

use crate::error::Error;

/// Extract the content of the first markdown code fence, if any.
///
/// Prose before the opening fence and after the closing one is dropped.
/// An unclosed fence runs to the end of the text.
pub fn strip_fences(text: &str) -> &str {
    let start = match text.find("```") {
        Some(idx) => idx + 3,
        None => return text.trim(),
    };
    let inner = &text[start..];

    // drop the language tag line (```json)
    let inner = match inner.find('\n') {
        Some(idx) => &inner[idx + 1..],
        None => inner,
    };
    match inner.find("```") {
        Some(end) => inner[..end].trim(),
        None => inner.trim(),
    }
}

/// Parse an answer that has to be a JSON object.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, Error> {
    match serde_json::from_str(strip_fences(text))? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Oracle(format!(
            "expected a JSON object, got {}",
            truncate(&other.to_string(), 80)
        ))),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
