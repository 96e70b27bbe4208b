//! Chat-completions text generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use voxreel_core::generate::{GenerateError, TextGenerator, TextRequest};

use crate::client::OpenAiClient;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, request: &TextRequest) -> Result<String, GenerateError> {
        let body = ChatCompletionRequest {
            model: &self.config().chat_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
        };

        let response: ChatCompletionResponse = self
            .post_json("/chat/completions", &body)
            .await?
            .json()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerateError::Empty)
    }
}
