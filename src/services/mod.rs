pub mod ai_service;
pub mod gemini; // Google Gemini (default)
pub mod openrouter; // OpenRouter, OpenAI-compatible

use anyhow::{Context, Result};
use std::sync::Arc;

pub use ai_service::{GenerationRequest, GenerationResponse, GenerativeModel, InlineImage};
pub use gemini::GeminiService;
pub use openrouter::OpenRouterService;

use crate::config::{Config, Provider};

/// Build the single model client shared by every handler.
pub fn build_model(config: &Config) -> Result<Arc<dyn GenerativeModel>> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("failed to build HTTP client")?;

    let model: Arc<dyn GenerativeModel> = match config.provider {
        Provider::Gemini => Arc::new(
            GeminiService::new(config.api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_http_client(http),
        ),
        Provider::OpenRouter => Arc::new(
            OpenRouterService::new(config.api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_http_client(http),
        ),
    };

    Ok(model)
}
