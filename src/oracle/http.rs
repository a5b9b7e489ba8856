//! Chat-completions oracle.
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::OracleConfig;
use crate::error::Error;

use super::Oracle;

const SYSTEM_PROMPT: &str =
    "You are a careful assistant for a language-learning product. Answer with JSON only.";

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Oracle backed by an OpenAI-compatible chat completions endpoint.
pub struct HttpOracle {
    client: Client,
    endpoint: Url,
    model: String,
    temperature: f32,
    api_key: String,
}

impl HttpOracle {
    pub fn new(endpoint: Url, model: &str, api_key: &str, temperature: f32, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            temperature,
            api_key: api_key.to_string(),
        })
    }

    /// Build from configuration, reading the API key from the configured environment variable.
    pub fn from_config(config: &OracleConfig) -> Result<Self, Error> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            Error::Config(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;
        info!("using model {} at {}", config.model, config.endpoint);
        Self::new(
            config.endpoint_url()?,
            &config.model,
            &api_key,
            config.temperature,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl Oracle for HttpOracle {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        debug!("sending {} bytes prompt to {}", prompt.len(), self.endpoint);
        let response: ChatResponse = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Oracle("empty completion".to_string()))
    }
}
