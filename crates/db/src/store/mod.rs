//! The persistence contract the pipeline is written against.
//!
//! [`ProjectStore`] is a pure CRUD interface with swappable backings:
//! [`MemoryProjectStore`] for tests and keyless development runs,
//! [`PgProjectStore`] for production. Orchestrators hold no state across
//! calls and re-read the project fresh on every invocation, so the store
//! exclusively owns persisted state.

mod memory;
mod postgres;

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

use async_trait::async_trait;
use voxreel_core::types::ProjectId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Errors surfaced by a store backing.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored value could not be decoded: {0}")]
    Decode(String),
}

/// Durable keyed storage for [`Project`] entities.
///
/// All operations are atomic with respect to a single project record: a
/// reader never observes a partially applied write. The store itself offers
/// no cross-call concurrency control; the pipeline layers a per-project
/// guard on top.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new draft built from `input`, returning the created record.
    async fn create(&self, input: CreateProject) -> Result<Project, StoreError>;

    /// Fetch a project by id. `None` if absent.
    async fn get(&self, id: ProjectId) -> Result<Option<Project>, StoreError>;

    /// All projects, most recently created first.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    /// Merge the supplied fields into an existing record.
    ///
    /// `None` fields are left unchanged. Returns `None` if no record with
    /// the given id exists.
    async fn update(&self, id: ProjectId, input: UpdateProject)
        -> Result<Option<Project>, StoreError>;

    /// Remove a project. Returns `true` if a record was deleted.
    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError>;
}
