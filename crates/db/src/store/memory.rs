//! In-memory [`ProjectStore`] backing.
//!
//! A `RwLock<HashMap>` keyed by project id. Used by every test suite and as
//! the development fallback when no `DATABASE_URL` is configured. Writes
//! hold the lock for the whole merge, which gives the per-record atomicity
//! the contract requires.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use voxreel_core::types::ProjectId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::{ProjectStore, StoreError};

/// Non-durable store backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create(&self, input: CreateProject) -> Result<Project, StoreError> {
        let project = Project::new(input);
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn get(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let mut projects: Vec<Project> = self.projects.read().await.values().cloned().collect();
        // Most recent first; id as tie-break keeps the order deterministic.
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(projects)
    }

    async fn update(
        &self,
        id: ProjectId,
        input: UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = input.title {
            project.title = title;
        }
        if let Some(description) = input.description {
            project.description = description;
        }
        if let Some(category) = input.category {
            project.category = category;
        }
        if let Some(target_length) = input.target_length {
            project.target_length = target_length;
        }
        if let Some(tone) = input.tone {
            project.tone = tone;
        }
        if let Some(script) = input.script {
            project.script = Some(script);
        }
        if let Some(audio_url) = input.audio_url {
            project.audio_url = Some(audio_url);
        }
        if let Some(status) = input.status {
            project.status = status;
        }

        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError> {
        Ok(self.projects.write().await.remove(&id).is_some())
    }
}
