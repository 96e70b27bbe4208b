//! Capability seams for external generation services.
//!
//! The pipelines depend on these traits, never on a concrete client, so
//! tests substitute stubs and a deployment can swap providers without
//! touching orchestration logic. Implementations live in `voxreel-openai`.

use async_trait::async_trait;

/// Errors surfaced by a generation/synthesis capability.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The capability could not be reached or the transfer failed.
    #[error("Capability request failed: {0}")]
    Transport(String),

    /// The capability rejected the request.
    #[error("Capability returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The capability answered but produced no usable output.
    #[error("Capability returned no usable output")]
    Empty,
}

/// A text-generation request: system/user instruction pair plus sampling
/// parameters.
#[derive(Debug, Clone)]
pub struct TextRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Synchronous (from the caller's view) text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &TextRequest) -> Result<String, GenerateError>;
}

/// A speech-synthesis request: full text plus voice identifier.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: String,
}

/// Synchronous speech synthesis producing one complete audio artifact.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, GenerateError>;
}
