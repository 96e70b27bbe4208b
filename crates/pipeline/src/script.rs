//! Script generation orchestrator.

use std::sync::Arc;

use voxreel_core::generate::{TextGenerator, TextRequest};
use voxreel_core::project::ProjectStatus;
use voxreel_core::prompt::{compose_script_prompt, PromptSpec, SCRIPT_MAX_TOKENS, SCRIPT_TEMPERATURE};
use voxreel_core::types::ProjectId;
use voxreel_db::models::project::{Project, UpdateProject};
use voxreel_db::store::ProjectStore;

use crate::error::PipelineError;
use crate::lock::ProjectLocks;

/// Result of a successful script generation run.
#[derive(Debug)]
pub struct ScriptOutcome {
    pub script: String,
    pub project: Project,
}

/// Turns a project's attributes into a text-generation request and persists
/// the validated result.
///
/// Stateless across calls: every run re-reads the project. On success there
/// is exactly one store write (script + advanced status together); on
/// failure there are none, so the project is byte-for-byte what it was
/// before the call.
pub struct ScriptPipeline {
    store: Arc<dyn ProjectStore>,
    generator: Arc<dyn TextGenerator>,
    locks: Arc<ProjectLocks>,
}

impl ScriptPipeline {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        generator: Arc<dyn TextGenerator>,
        locks: Arc<ProjectLocks>,
    ) -> Self {
        Self {
            store,
            generator,
            locks,
        }
    }

    /// Generate and persist a script for the given project.
    ///
    /// No retries: a failed capability call surfaces to the caller with the
    /// failure detail attached, and re-issuing the request is the caller's
    /// decision.
    pub async fn generate(&self, project_id: ProjectId) -> Result<ScriptOutcome, PipelineError> {
        let _guard = self.locks.acquire(project_id).await;

        let project = self
            .store
            .get(project_id)
            .await?
            .ok_or(PipelineError::NotFound(project_id))?;

        let prompt = compose_script_prompt(&PromptSpec {
            family: project.category.family(),
            title: &project.title,
            description: &project.description,
            category: project.category.as_str(),
            word_budget: project.target_length.word_budget(),
            tone: &project.tone,
        });

        let request = TextRequest {
            system: prompt.system,
            user: prompt.user,
            temperature: SCRIPT_TEMPERATURE,
            max_output_tokens: SCRIPT_MAX_TOKENS,
        };

        let script = match self.generator.generate(&request).await {
            Ok(script) if !script.trim().is_empty() => script,
            Ok(_) => {
                tracing::warn!(%project_id, "Script generation returned no usable text");
                return Err(voxreel_core::generate::GenerateError::Empty.into());
            }
            Err(error) => {
                tracing::warn!(%project_id, %error, "Script generation failed");
                return Err(error.into());
            }
        };

        let updated = self
            .store
            .update(
                project_id,
                UpdateProject {
                    script: Some(script.clone()),
                    status: Some(project.status.advanced(ProjectStatus::ScriptReady)),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(PipelineError::NotFound(project_id))?;

        tracing::info!(
            %project_id,
            status = %updated.status,
            script_chars = script.len(),
            "Script generated"
        );

        Ok(ScriptOutcome {
            script,
            project: updated,
        })
    }
}
