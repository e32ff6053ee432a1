use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::services::{gemini, openrouter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenRouter,
}

impl std::str::FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "openrouter" => Ok(Provider::OpenRouter),
            other => bail!("unknown AI_PROVIDER '{}' (expected gemini or openrouter)", other),
        }
    }
}

/// Process configuration, read once at start-up.
#[derive(Clone)]
pub struct Config {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// None keeps the provider call unbounded.
    pub request_timeout: Option<Duration>,
    pub bind_addr: String,
    pub static_dir: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("provider", &self.provider)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let provider: Provider = match var("AI_PROVIDER") {
            Some(value) => value.parse()?,
            None => Provider::Gemini,
        };

        let (key_var, model_var, url_var, default_model, default_url) = match provider {
            Provider::Gemini => (
                "GEMINI_API_KEY",
                "GEMINI_MODEL",
                "GEMINI_BASE_URL",
                gemini::DEFAULT_MODEL,
                gemini::DEFAULT_BASE_URL,
            ),
            Provider::OpenRouter => (
                "OPENROUTER_API_KEY",
                "OPENROUTER_MODEL",
                "OPENROUTER_BASE_URL",
                openrouter::DEFAULT_MODEL,
                openrouter::DEFAULT_BASE_URL,
            ),
        };

        let api_key = var(key_var).with_context(|| format!("{} must be set in .env file", key_var))?;

        let request_timeout = match var("AI_REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("AI_REQUEST_TIMEOUT_SECS is not a number: {}", value))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            provider,
            api_key,
            model: var(model_var).unwrap_or_else(|| default_model.to_string()),
            base_url: var(url_var).unwrap_or_else(|| default_url.to_string()),
            request_timeout,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }
}
