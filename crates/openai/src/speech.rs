//! Text-to-speech synthesis.
//!
//! Requests one complete MP3 artifact per call; the API's streaming mode is
//! deliberately unused because the pipeline persists a single finished
//! reference.

use async_trait::async_trait;
use serde::Serialize;
use voxreel_core::generate::{GenerateError, SpeechRequest, SpeechSynthesizer};

use crate::client::OpenAiClient;

#[derive(Debug, Serialize)]
struct SpeechSynthesisRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

#[async_trait]
impl SpeechSynthesizer for OpenAiClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, GenerateError> {
        let body = SpeechSynthesisRequest {
            model: &self.config().tts_model,
            voice: &request.voice,
            input: &request.text,
        };

        let bytes = self
            .post_json("/audio/speech", &body)
            .await?
            .bytes()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        if bytes.is_empty() {
            return Err(GenerateError::Empty);
        }
        Ok(bytes.to_vec())
    }
}
