//! PostgreSQL [`ProjectStore`] backing.

use async_trait::async_trait;
use sqlx::FromRow;
use voxreel_core::policy::TargetLength;
use voxreel_core::project::{Category, ProjectStatus};
use voxreel_core::types::{ProjectId, Timestamp};

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::{ProjectStore, StoreError};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, target_length, tone, \
                       script, audio_url, status, created_at";

/// Durable store backed by the `projects` table.
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape: enum-valued columns come back as TEXT and are validated
/// while converting into [`Project`].
#[derive(FromRow)]
struct ProjectRow {
    id: ProjectId,
    title: String,
    description: String,
    category: String,
    target_length: String,
    tone: String,
    script: Option<String>,
    audio_url: Option<String>,
    status: String,
    created_at: Timestamp,
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> Result<Self, StoreError> {
        let category = Category::parse(&row.category)
            .ok_or_else(|| StoreError::Decode(format!("unknown category '{}'", row.category)))?;
        let target_length = TargetLength::parse(&row.target_length).ok_or_else(|| {
            StoreError::Decode(format!("unknown target length '{}'", row.target_length))
        })?;
        let status = ProjectStatus::parse(&row.status)
            .ok_or_else(|| StoreError::Decode(format!("unknown status '{}'", row.status)))?;

        Ok(Project {
            id: row.id,
            title: row.title,
            description: row.description,
            category,
            target_length,
            tone: row.tone,
            script: row.script,
            audio_url: row.audio_url,
            status,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create(&self, input: CreateProject) -> Result<Project, StoreError> {
        let project = Project::new(input);
        let query = format!(
            "INSERT INTO projects ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project.id)
            .bind(&project.title)
            .bind(&project.description)
            .bind(project.category.as_str())
            .bind(project.target_length.as_str())
            .bind(&project.tone)
            .bind(&project.script)
            .bind(&project.audio_url)
            .bind(project.status.as_str())
            .bind(project.created_at)
            .fetch_one(&self.pool)
            .await?;
        row.try_into()
    }

    async fn get(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }

    async fn update(
        &self,
        id: ProjectId,
        input: UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                target_length = COALESCE($5, target_length),
                tone = COALESCE($6, tone),
                script = COALESCE($7, script),
                audio_url = COALESCE($8, audio_url),
                status = COALESCE($9, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.map(Category::as_str))
            .bind(input.target_length.map(TargetLength::as_str))
            .bind(&input.tone)
            .bind(&input.script)
            .bind(&input.audio_url)
            .bind(input.status.map(ProjectStatus::as_str))
            .fetch_optional(&self.pool)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
