use thiserror::Error;

/// Failures while talking to the generative model provider.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} returned no completion text")]
    EmptyCompletion { provider: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything that can go wrong between a caller's request and a typed result.
///
/// The first four variants are pipeline failures and are always absorbed by
/// a fallback value. The last two reject caller input before any model call
/// is made and are returned to the caller.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("AI service unavailable: {0}")]
    NetworkOrServiceFailure(#[from] ServiceError),

    #[error("model response contained no JSON object")]
    MalformedResponse,

    #[error("model response did not match the expected shape: {0}")]
    DecodeFailure(String),

    #[error("model response failed validation: {0}")]
    InvalidResult(String),

    #[error("{0}")]
    AnalysisFailed(String),

    #[error("invalid body metrics: {0}")]
    InvalidMetrics(String),
}

impl PipelineError {
    /// True for errors caused by the caller's input rather than by the model.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PipelineError::AnalysisFailed(_) | PipelineError::InvalidMetrics(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
