use engine_logging::{engine_debug, engine_warn};
use serde::{Deserialize, Serialize};

use crate::config::CompletionSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("API 키가 설정되지 않았습니다.")]
    MissingApiKey,
    #[error("요청 실패: {0}")]
    Request(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("응답 형식 오류: {0}")]
    Malformed(String),
    #[error("빈 응답")]
    EmptyCompletion,
}

/// Produces a completion for a system prompt plus one user message.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_message: &str)
        -> Result<String, GenerateError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    settings: CompletionSettings,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(settings: CompletionSettings) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|err| GenerateError::Request(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, GenerateError> {
        if self.settings.api_key.trim().is_empty() {
            return Err(GenerateError::MissingApiKey);
        }
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        engine_debug!(
            "completion request: model {}, {} chars of input",
            self.settings.model,
            user_message.chars().count()
        );
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| GenerateError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            engine_warn!("completion endpoint returned {}", status);
            return Err(GenerateError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| GenerateError::Malformed(err.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(GenerateError::EmptyCompletion);
        }
        Ok(content)
    }
}
