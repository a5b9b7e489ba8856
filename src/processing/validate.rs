/*! Universal vocabulary batch validation

Batch `n` is expected at `<dir>/batch_<nn>.json` and has to hold a list of
[crate::config::BatchConfig::expected_words] word objects.
Each word object carries every field of [REQUIRED_FIELDS], covers every language of [REQUIRED_LANGUAGES]
and has an id of the form `universal_a1_<3-digit rank>_<2-letter lang>`.

Problems are either errors (the batch is [BatchStatus::Failed]) or warnings
(the batch is [BatchStatus::Warning]). Errors always take precedence.

Validation only reads batch files.
!*/
use std::fmt;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde_json::{Map, Value};

use crate::config::constants::{PER_LANGUAGE_FIELDS, REQUIRED_FIELDS, REQUIRED_LANGUAGES};
use crate::config::BatchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Missing,
    InvalidJson,
    Failed,
    Warning,
    Passed,
}

impl BatchStatus {
    /// Whether the status counts as a failure in a run.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BatchStatus::Missing | BatchStatus::InvalidJson | BatchStatus::Failed
        )
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BatchStatus::Missing => "MISSING",
            BatchStatus::InvalidJson => "INVALID_JSON",
            BatchStatus::Failed => "FAILED",
            BatchStatus::Warning => "WARNING",
            BatchStatus::Passed => "PASSED",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch: usize,
    pub path: PathBuf,
    pub status: BatchStatus,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl BatchReport {
    fn new(batch: usize, path: PathBuf, errors: Vec<String>, warnings: Vec<String>) -> Self {
        let status = if !errors.is_empty() {
            BatchStatus::Failed
        } else if !warnings.is_empty() {
            BatchStatus::Warning
        } else {
            BatchStatus::Passed
        };
        Self {
            batch,
            path,
            status,
            errors,
            warnings,
        }
    }
}

/// Aggregated result of a validation run.
#[derive(Debug, Default)]
pub struct ValidationSummary {
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    pub reports: Vec<BatchReport>,
}

impl ValidationSummary {
    pub fn push(&mut self, report: BatchReport) {
        match report.status {
            BatchStatus::Passed => self.passed += 1,
            BatchStatus::Warning => self.warned += 1,
            _ => self.failed += 1,
        }
        self.reports.push(report);
    }

    /// A run succeeds when no batch failed. Warnings do not count.
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

pub struct BatchValidator<'a> {
    dir: PathBuf,
    expected: &'a BatchConfig,
}

impl<'a> BatchValidator<'a> {
    pub fn new(dir: &Path, expected: &'a BatchConfig) -> Self {
        Self {
            dir: dir.to_path_buf(),
            expected,
        }
    }

    pub fn batch_path(&self, batch: usize) -> PathBuf {
        self.dir.join(format!("batch_{:02}.json", batch))
    }

    /// Validate batch files `first..=last`.
    pub fn validate_range(&self, first: usize, last: usize) -> ValidationSummary {
        let mut summary = ValidationSummary::default();
        for batch in first..=last {
            let report = self.validate_batch(batch);
            match report.status {
                BatchStatus::Passed => info!("[batch {}] {}", batch, report.status),
                BatchStatus::Warning => {
                    warn!("[batch {}] {}", batch, report.status);
                    for w in &report.warnings {
                        warn!("[batch {}]   {}", batch, w);
                    }
                }
                _ => {
                    error!("[batch {}] {}", batch, report.status);
                    for e in &report.errors {
                        error!("[batch {}]   {}", batch, e);
                    }
                }
            }
            summary.push(report);
        }
        info!(
            "{} passed, {} with warnings, {} failed",
            summary.passed, summary.warned, summary.failed
        );
        summary
    }

    /// Validate a single batch file.
    pub fn validate_batch(&self, batch: usize) -> BatchReport {
        let path = self.batch_path(batch);
        if !path.exists() {
            return BatchReport {
                batch,
                errors: vec![format!("{:?} not found", path)],
                path,
                status: BatchStatus::Missing,
                warnings: Vec::new(),
            };
        }

        let value = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|raw| serde_json::from_str::<Value>(&raw).map_err(|e| e.to_string()));

        match value {
            Ok(value) => {
                let (errors, warnings) = self.check(&value);
                BatchReport::new(batch, path, errors, warnings)
            }
            Err(e) => BatchReport {
                batch,
                path,
                status: BatchStatus::InvalidJson,
                errors: vec![e],
                warnings: Vec::new(),
            },
        }
    }

    /// Check a parsed batch, returning errors and warnings.
    pub fn check(&self, value: &Value) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let words = match value.as_array() {
            Some(words) => words,
            None => {
                errors.push("Expected a list of words".to_string());
                return (errors, warnings);
            }
        };

        if words.len() != self.expected.expected_words {
            errors.push(format!(
                "Expected {} words, found {}",
                self.expected.expected_words,
                words.len()
            ));
        }

        for (idx, word) in words.iter().enumerate() {
            match word.as_object() {
                Some(fields) => self.check_word(idx + 1, fields, &mut errors, &mut warnings),
                None => errors.push(format!("Word {}: not an object", idx + 1)),
            }
        }

        (errors, warnings)
    }

    fn check_word(
        &self,
        position: usize,
        fields: &Map<String, Value>,
        errors: &mut Vec<String>,
        warnings: &mut Vec<String>,
    ) {
        let label = match fields.get("word").and_then(Value::as_str) {
            Some(w) => format!("Word {} ({})", position, w),
            None => format!("Word {}", position),
        };

        for field in REQUIRED_FIELDS {
            if !fields.contains_key(field) {
                errors.push(format!("{}: missing field '{}'", label, field));
            }
        }

        for field in PER_LANGUAGE_FIELDS {
            match fields.get(field) {
                Some(Value::Object(langs)) => {
                    let missing: Vec<&str> = REQUIRED_LANGUAGES
                        .iter()
                        .copied()
                        .filter(|lang| !langs.contains_key(*lang))
                        .collect();
                    if !missing.is_empty() {
                        errors.push(format!(
                            "{}: missing languages in '{}': {}",
                            label,
                            field,
                            missing.join(", ")
                        ));
                    }
                }
                Some(_) => errors.push(format!("{}: '{}' is not an object", label, field)),
                None => (),
            }
        }

        if let Some(Value::Object(examples)) = fields.get("examples") {
            for (lang, list) in examples {
                match list.as_array() {
                    Some(list) if list.len() != self.expected.expected_examples => {
                        warnings.push(format!(
                            "{}: {} examples in '{}', expected {}",
                            label,
                            list.len(),
                            lang,
                            self.expected.expected_examples
                        ))
                    }
                    Some(_) => (),
                    None => errors.push(format!(
                        "{}: examples in '{}' are not a list",
                        label, lang
                    )),
                }
            }
        }

        if let Some(id) = fields.get("id") {
            match id.as_str() {
                Some(id) if self.valid_id(id) => (),
                _ => errors.push(format!("{}: invalid id {}", label, id)),
            }
        }

        if let Some(level) = fields.get("cefrLevel") {
            if level.as_str() != Some(self.expected.level.as_str()) {
                errors.push(format!(
                    "{}: cefrLevel is {}, expected {:?}",
                    label, level, self.expected.level
                ));
            }
        }
    }

    /// `universal_<level>_<3 digits>_<2 lowercase letters>`
    fn valid_id(&self, id: &str) -> bool {
        let prefix = format!("universal_{}_", self.expected.level.to_lowercase());
        let rest = match id.strip_prefix(&prefix) {
            Some(rest) => rest,
            None => return false,
        };
        match rest.split_once('_') {
            Some((rank, lang)) => {
                rank.len() == 3
                    && rank.chars().all(|c| c.is_ascii_digit())
                    && lang.len() == 2
                    && lang.chars().all(|c| c.is_ascii_lowercase())
            }
            None => false,
        }
    }
}
