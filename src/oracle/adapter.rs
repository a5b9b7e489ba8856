//! Batched translation and sentence generation over an [Oracle].
use std::time::Duration;

use log::{debug, info, warn};
use serde_json::{json, Map, Value};

use crate::config::OracleConfig;
use crate::error::Error;
use crate::lang::lang_name;
use crate::types::{RawSentence, VocabularyEntry};

use super::response::parse_object;
use super::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use super::{Generation, Oracle};

/// One word to write sentences for.
#[derive(Debug, Clone, Copy)]
pub struct SentenceRequest<'a> {
    pub entry: &'a VocabularyEntry,
    pub domain: &'a str,
}

/// What sentences should look like.
#[derive(Debug, Clone)]
pub struct SentenceSpec {
    pub language: String,
    pub translation_language: String,
    pub count: usize,
}

pub struct GenerationAdapter {
    oracle: Box<dyn Oracle>,
    sleeper: Box<dyn Sleeper>,
    retry: RetryPolicy,
    cooldown: Duration,
    translation_batch_size: usize,
}

impl GenerationAdapter {
    pub fn new(oracle: Box<dyn Oracle>, config: &OracleConfig) -> Self {
        Self {
            oracle,
            sleeper: Box::new(ThreadSleeper),
            retry: config.retry_policy(),
            cooldown: config.cooldown(),
            translation_batch_size: config.translation_batch_size.max(1),
        }
    }

    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Send `prompt` under the retry policy, then cool down.
    fn ask(&self, prompt: &str) -> Result<Map<String, Value>, Error> {
        let result = self
            .retry
            .run(self.sleeper.as_ref(), |attempt| {
                debug!("oracle request, attempt {}", attempt);
                let answer = self.oracle.complete(prompt)?;
                parse_object(&answer)
            });
        self.sleeper.sleep(self.cooldown);
        result
    }

    /// Translate `items` from `from` to `to`.
    ///
    /// Output is aligned with `items`. Items of a batch whose request failed,
    /// and items missing from an answer, are [Generation::Failed].
    pub fn translate(&self, items: &[String], from: &str, to: &str) -> Result<Vec<Generation>, Error> {
        let mut out = Vec::with_capacity(items.len());
        let nb_batches = (items.len() + self.translation_batch_size - 1) / self.translation_batch_size;

        for (batch_idx, batch) in items.chunks(self.translation_batch_size).enumerate() {
            info!(
                "[batch {}/{}] translating {} items",
                batch_idx + 1,
                nb_batches,
                batch.len()
            );
            let payload: Map<String, Value> = batch
                .iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), Value::String(item.clone())))
                .collect();
            let prompt = translation_prompt(&Value::Object(payload), from, to)?;

            match self.ask(&prompt) {
                Ok(answer) => {
                    for (i, item) in batch.iter().enumerate() {
                        let generation = match answer.get(&i.to_string()) {
                            Some(Value::String(t)) => Generation::Generated(t.clone()),
                            Some(_) => Generation::failed(item, "not a string"),
                            None => Generation::failed(item, "missing from answer"),
                        };
                        if let Generation::Failed { reason, .. } = &generation {
                            warn!("[batch {}] item {}: {}", batch_idx + 1, i, reason);
                        }
                        out.push(generation);
                    }
                }
                Err(e) => {
                    warn!("[batch {}] translation failed: {}", batch_idx + 1, e);
                    let reason = e.to_string();
                    out.extend(batch.iter().map(|item| Generation::failed(item, &reason)));
                }
            }
        }

        Ok(out)
    }

    /// Ask for `spec.count` sentences for each request.
    ///
    /// Output is aligned with `requests`; a word gets `None` when the request failed
    /// or the answer held no usable sentence for it.
    pub fn generate_sentences(
        &self,
        requests: &[SentenceRequest],
        spec: &SentenceSpec,
    ) -> Result<Vec<Option<Vec<RawSentence>>>, Error> {
        let payload: Map<String, Value> = requests
            .iter()
            .enumerate()
            .map(|(i, req)| {
                let translation = req
                    .entry
                    .translation_or_first(&spec.translation_language)
                    .unwrap_or("");
                (
                    i.to_string(),
                    json!({
                        "word": req.entry.word,
                        "translation": translation,
                        "domain": req.domain,
                    }),
                )
            })
            .collect();
        let prompt = sentence_prompt(&Value::Object(payload), spec)?;

        let answer = match self.ask(&prompt) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("[{}] sentence generation failed: {}", spec.language, e);
                return Ok(vec![None; requests.len()]);
            }
        };

        Ok(requests
            .iter()
            .enumerate()
            .map(|(i, req)| {
                let sentences = answer
                    .get(&i.to_string())
                    .and_then(|v| v.get("sentences"))
                    .and_then(Value::as_array)
                    .map(|items| parse_sentences(items, req.domain))
                    .filter(|sentences| !sentences.is_empty());
                if sentences.is_none() {
                    warn!("[{}] no usable sentence for {:?}", spec.language, req.entry.word);
                }
                sentences
            })
            .collect())
    }
}

/// Keep the elements that are sentences, either plain strings or raw sentence objects.
fn parse_sentences(items: &[Value], domain: &str) -> Vec<RawSentence> {
    items
        .iter()
        .filter_map(|item| {
            let mut raw = match item {
                Value::String(s) => RawSentence::new(s),
                other => match serde_json::from_value::<RawSentence>(other.clone()) {
                    Ok(raw) => raw,
                    Err(e) => {
                        debug!("dropping sentence {}: {}", other, e);
                        return None;
                    }
                },
            };
            if raw.domain.is_none() {
                raw.domain = Some(domain.to_string());
            }
            Some(raw)
        })
        .collect()
}

fn translation_prompt(payload: &Value, from: &str, to: &str) -> Result<String, Error> {
    Ok(format!(
        "Translate every value of the following JSON object from {} to {}. \
         Keep the keys unchanged and answer with a JSON object mapping each key to its translation.\n\n{}",
        lang_name(from),
        lang_name(to),
        serde_json::to_string_pretty(payload)?
    ))
}

fn sentence_prompt(payload: &Value, spec: &SentenceSpec) -> Result<String, Error> {
    Ok(format!(
        "For each entry of the following JSON object, write {count} natural {lang} sentences \
         using the word in the given domain. Answer with a JSON object using the same keys, \
         each holding {{\"sentences\": [...]}} where every sentence is an object with \
         \"sentence\", \"translation\" (in {tlang}), \"vocabulary_used\" and \"difficulty\" \
         (basic, intermediate or advanced).\n\n{payload}",
        count = spec.count,
        lang = lang_name(&spec.language),
        tlang = lang_name(&spec.translation_language),
        payload = serde_json::to_string_pretty(payload)?
    ))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::oracle::NoSleep;

    /// Answers with scripted replies, in order, and keeps the prompts it got.
    struct Scripted {
        replies: RefCell<VecDeque<Result<String, Error>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<String, Error>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Oracle for std::rc::Rc<Scripted> {
        fn complete(&self, prompt: &str) -> Result<String, Error> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Oracle("no more replies".to_string())))
        }
    }

    fn config(batch: usize, attempts: u32) -> OracleConfig {
        OracleConfig {
            max_attempts: attempts,
            translation_batch_size: batch,
            cooldown_ms: 0,
            backoff_ms: 0,
            ..Default::default()
        }
    }

    fn adapter(oracle: &std::rc::Rc<Scripted>, batch: usize, attempts: u32) -> GenerationAdapter {
        GenerationAdapter::new(Box::new(oracle.clone()), &config(batch, attempts))
            .with_sleeper(Box::new(NoSleep))
    }

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Satz {}", i)).collect()
    }

    #[test]
    fn failed_batch_is_isolated() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![
            Ok("```json\n{\"0\": \"Sentence 0\", \"1\": \"Sentence 1\"}\n```".to_string()),
            Err(Error::Oracle("timeout".to_string())),
            Ok("{\"0\": \"Sentence 4\"}".to_string()),
        ]));
        let out = adapter(&oracle, 2, 1)
            .translate(&items(5), "de", "en")
            .unwrap();

        assert_eq!(out.len(), 5);
        assert_eq!(out[0], Generation::Generated("Sentence 0".to_string()));
        assert_eq!(out[1], Generation::Generated("Sentence 1".to_string()));
        assert!(out[2].is_failed());
        assert!(out[3].is_failed());
        assert_eq!(out[3].value(), "[TRANSLATION ERROR: Satz 3]");
        assert_eq!(out[4], Generation::Generated("Sentence 4".to_string()));
    }

    #[test]
    fn unparsable_answer_fails_batch() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![Ok("I cannot help".to_string())]));
        let out = adapter(&oracle, 5, 1)
            .translate(&items(2), "de", "en")
            .unwrap();
        assert!(out.iter().all(Generation::is_failed));
    }

    #[test]
    fn missing_key_fails_item_only() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![Ok("{\"1\": \"Sentence 1\"}".to_string())]));
        let out = adapter(&oracle, 5, 1)
            .translate(&items(2), "de", "en")
            .unwrap();
        assert!(out[0].is_failed());
        assert_eq!(out[1].value(), "Sentence 1");
    }

    #[test]
    fn retries_before_failing() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![
            Err(Error::Oracle("busy".to_string())),
            Ok("{\"0\": \"Sentence 0\"}".to_string()),
        ]));
        let out = adapter(&oracle, 5, 2)
            .translate(&items(1), "de", "en")
            .unwrap();
        assert_eq!(out[0].value(), "Sentence 0");
        assert_eq!(oracle.prompts.borrow().len(), 2);
    }

    #[test]
    fn prompt_holds_positional_keys() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![Ok("{}".to_string())]));
        adapter(&oracle, 5, 1)
            .translate(&items(2), "de", "en")
            .unwrap();
        let prompt = &oracle.prompts.borrow()[0];
        assert!(prompt.contains("from German to English"));
        assert!(prompt.contains("\"0\": \"Satz 0\""));
        assert!(prompt.contains("\"1\": \"Satz 1\""));
    }

    #[test]
    fn sentences_are_mapped_back() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![Ok(r#"{
            "0": {"sentences": [
                {"sentence": "Die Stadt wächst.", "translation": "The city grows.", "difficulty": "basic"},
                "Die Stadt schläft.",
                {"translation": "no sentence"}
            ]},
            "1": {"sentences": []}
        }"#
        .to_string())]));
        let stadt = VocabularyEntry::new("die Stadt").with_translation("en", "city");
        let park = VocabularyEntry::new("der Park");
        let requests = vec![
            SentenceRequest {
                entry: &stadt,
                domain: "urban_planning",
            },
            SentenceRequest {
                entry: &park,
                domain: "general",
            },
        ];
        let spec = SentenceSpec {
            language: "de".to_string(),
            translation_language: "en".to_string(),
            count: 3,
        };

        let out = adapter(&oracle, 5, 1)
            .generate_sentences(&requests, &spec)
            .unwrap();

        let stadt_sentences = out[0].as_ref().unwrap();
        assert_eq!(stadt_sentences.len(), 2);
        assert_eq!(stadt_sentences[0].translation.as_deref(), Some("The city grows."));
        assert_eq!(stadt_sentences[1].domain.as_deref(), Some("urban_planning"));
        assert!(out[1].is_none());
        assert!(oracle.prompts.borrow()[0].contains("\"translation\": \"city\""));
    }

    #[test]
    fn failed_generation_gives_none() {
        let oracle = std::rc::Rc::new(Scripted::new(vec![]));
        let park = VocabularyEntry::new("der Park");
        let spec = SentenceSpec {
            language: "de".to_string(),
            translation_language: "en".to_string(),
            count: 3,
        };
        let out = adapter(&oracle, 5, 2)
            .generate_sentences(
                &[SentenceRequest {
                    entry: &park,
                    domain: "general",
                }],
                &spec,
            )
            .unwrap();
        assert_eq!(out, vec![None]);
    }
}
