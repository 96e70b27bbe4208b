use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use voxreel_core::error::CoreError;
use voxreel_db::store::StoreError;
use voxreel_pipeline::PipelineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, store, and pipeline errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the shape `{ "error", "code", "details"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `voxreel-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An orchestration error from a generation run.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A malformed creation/update payload, with field-level detail.
    #[error("Invalid project data")]
    Validation(#[from] validator::ValidationErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::Precondition(msg) => (
                    StatusCode::BAD_REQUEST,
                    "PRECONDITION_FAILED",
                    msg.clone(),
                    None,
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            AppError::Pipeline(pipeline) => match pipeline {
                PipelineError::NotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Project with id {id} not found"),
                    None,
                ),
                PipelineError::MissingScript(_) => (
                    StatusCode::BAD_REQUEST,
                    "PRECONDITION_FAILED",
                    "Project must have a script before generating a voiceover".to_string(),
                    None,
                ),
                PipelineError::Generation(cause) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    "Failed to generate content".to_string(),
                    Some(json!(cause.to_string())),
                ),
                PipelineError::Store(cause) => {
                    tracing::error!(error = %cause, "Store error during generation");
                    internal_error()
                }
            },

            AppError::Store(cause) => {
                tracing::error!(error = %cause, "Store error");
                internal_error()
            }

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid project data".to_string(),
                Some(json!(errors)),
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

/// 500 with a sanitized message; the full detail has already been logged.
fn internal_error() -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}
