use voxreel_core::generate::GenerateError;
use voxreel_core::types::ProjectId;
use voxreel_db::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Project {0} not found")]
    NotFound(ProjectId),

    #[error("Project {0} has no script; generate a script before requesting a voiceover")]
    MissingScript(ProjectId),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
