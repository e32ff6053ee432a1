use crate::errors::ServiceError;

/// Image attached to a generation request, already base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub base64_data: String,
}

impl InlineImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

/// A single prompt, optionally carrying one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    pub fn with_image(prompt: impl Into<String>, image: InlineImage) -> Self {
        Self {
            prompt: prompt.into(),
            image: Some(image),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    text: String,
}

impl GenerationResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw completion text exactly as the model produced it.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Trait for generative AI providers (Gemini, OpenRouter, etc.)
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Provider and model name, for logs.
    fn name(&self) -> String;

    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationResponse, ServiceError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let image = InlineImage {
            mime_type: "image/png".to_string(),
            base64_data: "iVBORw0KGgo=".to_string(),
        };
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }
}
