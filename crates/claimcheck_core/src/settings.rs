//! Startup configuration: credentials and model selection, read once from
//! the environment and passed in explicitly from then on.

use anyhow::{bail, Result};

/// Environment variable for the API key (required).
pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";
/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "PERPLEXITY_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "PERPLEXITY_BASE_URL";

pub const DEFAULT_MODEL: &str = "mistral-7b-instruct";
pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Settings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build settings from the environment. The API key is the only
    /// required value; a blank key counts as missing.
    pub fn from_env() -> Result<Self> {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!("{API_KEY_ENV} not found in environment variables"),
        };
        let mut settings = Self::new(api_key);
        if let Ok(model) = std::env::var(MODEL_ENV) {
            settings.model = model;
        }
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            settings.base_url = base_url;
        }
        Ok(settings)
    }
}
