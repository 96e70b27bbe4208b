//! Handlers for the generation pipeline endpoints.
//!
//! Routes:
//! - `POST /projects/{id}/generate-script`    — run script generation
//! - `POST /projects/{id}/generate-voiceover` — run voiceover generation

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use voxreel_core::error::CoreError;
use voxreel_core::speech::validate_voice;
use voxreel_core::types::ProjectId;
use voxreel_db::models::project::Project;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub script: String,
    pub project: Project,
}

/// POST /api/projects/{id}/generate-script
pub async fn generate_script(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<GenerateScriptResponse>> {
    let outcome = state.scripts.generate(id).await?;
    Ok(Json(GenerateScriptResponse {
        script: outcome.script,
        project: outcome.project,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateVoiceoverRequest {
    pub voice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVoiceoverResponse {
    pub audio_url: String,
    pub project: Project,
}

/// POST /api/projects/{id}/generate-voiceover
///
/// The body is optional: both an absent body and `{}` select the default
/// voice, which is why this reads raw bytes instead of using the `Json`
/// extractor.
pub async fn generate_voiceover(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    body: Bytes,
) -> AppResult<Json<GenerateVoiceoverResponse>> {
    let request: GenerateVoiceoverRequest = if body.is_empty() {
        GenerateVoiceoverRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")))?
    };

    if let Some(voice) = request.voice.as_deref() {
        validate_voice(voice)?;
    }

    let outcome = state.voiceovers.generate(id, request.voice).await?;
    Ok(Json(GenerateVoiceoverResponse {
        audio_url: outcome.audio_url,
        project: outcome.project,
    }))
}
