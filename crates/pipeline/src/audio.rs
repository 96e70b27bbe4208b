//! Audio reference encoding.
//!
//! The voiceover orchestrator never handles storage details itself: it hands
//! the synthesized bytes to an [`AudioStore`] and persists whatever
//! reference comes back. The default backing inlines the artifact as a
//! `data:` URL; a deployment that outgrows inline audio swaps this one seam
//! for an object-storage implementation.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::PipelineError;

/// Persists one finished audio artifact, returning a self-describing
/// reference the rest of the system can address directly.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, audio: &[u8], content_type: &str) -> Result<String, PipelineError>;
}

/// Inlines the artifact as a base64 `data:` URL. Infallible.
#[derive(Debug, Default)]
pub struct DataUrlAudioStore;

#[async_trait]
impl AudioStore for DataUrlAudioStore {
    async fn store(&self, audio: &[u8], content_type: &str) -> Result<String, PipelineError> {
        Ok(format!(
            "data:{content_type};base64,{}",
            STANDARD.encode(audio)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn data_url_is_self_describing() {
        let url = DataUrlAudioStore
            .store(b"abc", "audio/mpeg")
            .await
            .unwrap();
        assert_eq!(url, "data:audio/mpeg;base64,YWJj");
    }

    #[tokio::test]
    async fn empty_artifact_still_encodes() {
        let url = DataUrlAudioStore.store(b"", "audio/mpeg").await.unwrap();
        assert_eq!(url, "data:audio/mpeg;base64,");
    }
}
