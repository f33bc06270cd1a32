//! Blocking client for the Anthropic Messages API.

use serde_json::{Value, json};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ThoughtLabelerError};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Seam between the labeling operations and the hosted completion service.
///
/// Implementors encapsulate transport and vendor details; tests substitute
/// a canned backend.
pub trait Completions {
    /// Send one system prompt plus one user turn, return the assistant's text.
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Explicitly constructed API client; lifecycle is scoped to the caller.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the Messages API request body for one system + user turn.
    fn request_body(&self, system: &str, user: &str) -> Value {
        json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": system,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {"type": "text", "text": user}
                    ]
                }
            ]
        })
    }
}

impl Completions for Client {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url = format!(
            "{}/v1/messages",
            self.config.base_url.trim_end_matches('/')
        );
        let body = self.request_body(system, user);

        debug!(
            "messages call (model={}, system_len={}, user_len={})",
            self.config.model,
            system.len(),
            user.len()
        );

        let resp = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            // Surface the service's own message when the error body is JSON
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| {
                    v["error"]["message"].as_str().map(|s| s.to_string())
                })
                .unwrap_or_else(|| format!("HTTP {}: {}", status, text));
            return Err(ThoughtLabelerError::Api { message });
        }

        let v: Value =
            serde_json::from_str(&text).map_err(|e| ThoughtLabelerError::Api {
                message: format!("invalid response body: {}", e),
            })?;

        v["content"]
            .as_array()
            .and_then(|blocks| blocks.iter().find_map(|b| b["text"].as_str()))
            .map(|s| s.to_string())
            .ok_or_else(|| ThoughtLabelerError::Api {
                message: "no text segment in response".into(),
            })
    }
}
