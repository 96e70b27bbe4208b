//! Route definitions for the `/projects` resource, including the two
//! generation endpoints nested under a project id.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{generation, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/generate-script      -> generate_script
/// POST   /{id}/generate-voiceover   -> generate_voiceover
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/generate-script", post(generation::generate_script))
        .route(
            "/{id}/generate-voiceover",
            post(generation::generate_voiceover),
        )
}
