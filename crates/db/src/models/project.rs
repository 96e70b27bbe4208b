//! Project entity model and DTOs.
//!
//! API JSON uses camelCase field names (`targetLength`, `audioUrl`,
//! `createdAt`); database columns use the snake_case equivalents.

use serde::{Deserialize, Serialize};
use validator::Validate;
use voxreel_core::policy::TargetLength;
use voxreel_core::project::{Category, ProjectStatus};
use voxreel_core::types::{ProjectId, Timestamp};

/// A project: one short-form video concept moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub target_length: TargetLength,
    pub tone: String,
    /// Null until script generation succeeds.
    pub script: Option<String>,
    /// Null until voiceover generation succeeds.
    pub audio_url: Option<String>,
    pub status: ProjectStatus,
    /// Set once at creation, never mutated.
    pub created_at: Timestamp,
}

impl Project {
    /// Construct a fresh draft from a creation payload.
    ///
    /// The single place where a project id is assigned and creation defaults
    /// (status `draft`, null script/audio) are applied.
    pub fn new(input: CreateProject) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            title: input.title,
            description: input.description,
            category: input.category,
            target_length: input.target_length,
            tone: input.tone,
            script: None,
            audio_url: None,
            status: ProjectStatus::Draft,
            created_at: chrono::Utc::now(),
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub category: Category,
    pub target_length: TargetLength,
    #[validate(length(min = 1, message = "tone must not be empty"))]
    pub tone: String,
}

/// DTO for updating an existing project. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub target_length: Option<TargetLength>,
    pub tone: Option<String>,
    pub script: Option<String>,
    pub audio_url: Option<String>,
    pub status: Option<ProjectStatus>,
}
