use crate::error::{Result, ThoughtLabelerError};

const DEFAULT_MODEL: &str = "claude-3-7-sonnet-latest";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Configuration for the Messages API calls, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `ANTHROPIC_API_KEY` is required; everything else has a default.
    pub fn load() -> Result<Self> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| ThoughtLabelerError::Config {
                message: "ANTHROPIC_API_KEY is not set".into(),
            })?;

        let model =
            std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let max_tokens = std::env::var("THOUGHT_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1000);
        let temperature = std::env::var("THOUGHT_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(1.0);

        let config = Self {
            api_key,
            model,
            base_url,
            max_tokens,
            temperature,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ThoughtLabelerError::Config {
                message: "ANTHROPIC_API_KEY is empty".into(),
            });
        }
        if self.max_tokens == 0 {
            return Err(ThoughtLabelerError::Config {
                message: "THOUGHT_MAX_TOKENS must be > 0".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ThoughtLabelerError::Config {
                message: "THOUGHT_TEMPERATURE must be between 0.0 and 2.0".into(),
            });
        }
        Ok(())
    }
}
