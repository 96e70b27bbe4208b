pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                            list, create
/// /projects/{id}                       get, update, delete
/// /projects/{id}/generate-script       run script generation (POST)
/// /projects/{id}/generate-voiceover    run voiceover generation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}

/// Assemble the full application router: health at root level, the API
/// under `/api`. Middleware is layered on by the binary entrypoint.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api", api_routes())
        .with_state(state)
}
