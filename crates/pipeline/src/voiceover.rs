//! Voiceover generation orchestrator.

use std::sync::Arc;

use voxreel_core::generate::{SpeechRequest, SpeechSynthesizer};
use voxreel_core::project::ProjectStatus;
use voxreel_core::speech::DEFAULT_VOICE;
use voxreel_core::types::ProjectId;
use voxreel_db::models::project::{Project, UpdateProject};
use voxreel_db::store::ProjectStore;

use crate::audio::AudioStore;
use crate::error::PipelineError;
use crate::lock::ProjectLocks;

/// MIME type of synthesized artifacts.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Result of a successful voiceover generation run.
#[derive(Debug)]
pub struct VoiceoverOutcome {
    pub audio_url: String,
    pub project: Project,
}

/// Synthesizes a project's script into narration and persists the encoded
/// audio reference.
///
/// Requires a prior successful script generation; a scriptless project fails
/// the precondition before any capability call is made. Partial audio is
/// never persisted.
pub struct VoiceoverPipeline {
    store: Arc<dyn ProjectStore>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio: Arc<dyn AudioStore>,
    locks: Arc<ProjectLocks>,
}

impl VoiceoverPipeline {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio: Arc<dyn AudioStore>,
        locks: Arc<ProjectLocks>,
    ) -> Self {
        Self {
            store,
            synthesizer,
            audio,
            locks,
        }
    }

    /// Generate and persist a voiceover for the given project.
    ///
    /// `voice` falls back to [`DEFAULT_VOICE`] when absent; validity of a
    /// caller-supplied voice is checked at the request boundary.
    pub async fn generate(
        &self,
        project_id: ProjectId,
        voice: Option<String>,
    ) -> Result<VoiceoverOutcome, PipelineError> {
        let _guard = self.locks.acquire(project_id).await;

        let project = self
            .store
            .get(project_id)
            .await?
            .ok_or(PipelineError::NotFound(project_id))?;

        let script = project
            .script
            .as_deref()
            .filter(|script| !script.trim().is_empty())
            .ok_or(PipelineError::MissingScript(project_id))?;

        let request = SpeechRequest {
            text: script.to_string(),
            voice: voice.unwrap_or_else(|| DEFAULT_VOICE.to_string()),
        };

        let bytes = match self.synthesizer.synthesize(&request).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(%project_id, %error, "Voiceover synthesis failed");
                return Err(error.into());
            }
        };

        let audio_url = self.audio.store(&bytes, AUDIO_CONTENT_TYPE).await?;

        let updated = self
            .store
            .update(
                project_id,
                UpdateProject {
                    audio_url: Some(audio_url.clone()),
                    status: Some(project.status.advanced(ProjectStatus::VoiceoverDone)),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(PipelineError::NotFound(project_id))?;

        tracing::info!(
            %project_id,
            status = %updated.status,
            voice = %request.voice,
            audio_bytes = bytes.len(),
            "Voiceover generated"
        );

        Ok(VoiceoverOutcome {
            audio_url,
            project: updated,
        })
    }
}
