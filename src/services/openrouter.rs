use serde::{Deserialize, Serialize};

use super::ai_service::{GenerationRequest, GenerationResponse, GenerativeModel};
use crate::errors::ServiceError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

const PROVIDER: &str = "OpenRouter";
const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        #[serde(rename = "type")]
        content_type: String,
        text: String,
    },
    ImageUrl {
        #[serde(rename = "type")]
        content_type: String,
        image_url: ImageData,
    },
}

#[derive(Debug, Serialize)]
struct ImageData {
    url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: Option<String>,
}

/// OpenAI-compatible chat completion client for OpenRouter.
pub struct OpenRouterService {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenRouterService {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn build_body(&self, request: &GenerationRequest) -> ChatRequest {
        let mut content = vec![ContentPart::Text {
            content_type: "text".to_string(),
            text: request.prompt.clone(),
        }];

        if let Some(image) = &request.image {
            let data_url = image.data_url();
            log::debug!(
                "🖼️ Image data URL created: {}... (first 100 chars)",
                &data_url[..100.min(data_url.len())]
            );
            content.push(ContentPart::ImageUrl {
                content_type: "image_url".to_string(),
                image_url: ImageData { url: data_url },
            });
        }

        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait::async_trait]
impl GenerativeModel for OpenRouterService {
    fn name(&self) -> String {
        format!("{} ({})", PROVIDER, self.model)
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ServiceError> {
        let body = self.build_body(request);

        log::info!("🤖 Sending request to OpenRouter with model: {}", self.model);
        log::debug!("📤 Request payload size: {} bytes", serde_json::to_string(&body)?.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", "https://github.com/fitness-ai-advisor") // attribution header OpenRouter asks for
            .header("X-Title", "Fitness AI Advisor")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 OpenRouter response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ OpenRouter API error ({}): {}", status, error_text);
            return Err(ServiceError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response.text().await?;
        log::debug!("📄 Raw OpenRouter response size: {} bytes", response_text.len());

        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ServiceError::EmptyCompletion { provider: PROVIDER })?;

        Ok(GenerationResponse::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ai_service::InlineImage;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> OpenRouterService {
        OpenRouterService::new("test_key".to_string(), "test_model".to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_returns_first_choice() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Stay hydrated!"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = service(&mock_server)
            .generate(&GenerationRequest::text("Any tips?"))
            .await
            .unwrap();

        assert_eq!(response.text(), "Stay hydrated!");
    }

    #[tokio::test]
    async fn test_generate_sends_image_as_data_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "{}"}}]
            })))
            .mount(&mock_server)
            .await;

        let request = GenerationRequest::with_image(
            "Analyze this food image",
            InlineImage {
                mime_type: "image/png".to_string(),
                base64_data: "AQID".to_string(),
            },
        );
        service(&mock_server).generate(&request).await.unwrap();

        let received = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        let content = &body["messages"][0]["content"];

        assert_eq!(body["model"], "test_model");
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[1]["type"], "image_url");
        assert_eq!(content[1]["image_url"]["url"], "data:image/png;base64,AQID");
    }

    #[tokio::test]
    async fn test_generate_with_no_choices_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock_server)
            .await;

        let err = service(&mock_server)
            .generate(&GenerationRequest::text("hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::EmptyCompletion { .. }));
    }

    #[tokio::test]
    async fn test_generate_reports_rate_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&mock_server)
            .await;

        let err = service(&mock_server)
            .generate(&GenerationRequest::text("hello"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("429"));
    }
}
