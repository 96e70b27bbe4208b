use std::sync::Arc;

use voxreel_core::generate::{SpeechSynthesizer, TextGenerator};
use voxreel_db::store::ProjectStore;
use voxreel_db::DbPool;
use voxreel_pipeline::{DataUrlAudioStore, ProjectLocks, ScriptPipeline, VoiceoverPipeline};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence. Trait object so tests run on the memory backing.
    pub store: Arc<dyn ProjectStore>,
    /// Script generation orchestrator.
    pub scripts: Arc<ScriptPipeline>,
    /// Voiceover generation orchestrator.
    pub voiceovers: Arc<VoiceoverPipeline>,
    /// Connection pool when running on the Postgres backing; `None` on the
    /// in-memory store. Used by the health endpoint only.
    pub db: Option<DbPool>,
}

impl AppState {
    /// Wire both pipelines around one store and one shared lock map, so
    /// script and voiceover runs against the same project serialize with
    /// each other.
    pub fn new(
        store: Arc<dyn ProjectStore>,
        generator: Arc<dyn TextGenerator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        db: Option<DbPool>,
    ) -> Self {
        let locks = Arc::new(ProjectLocks::new());
        let scripts = Arc::new(ScriptPipeline::new(
            Arc::clone(&store),
            generator,
            Arc::clone(&locks),
        ));
        let voiceovers = Arc::new(VoiceoverPipeline::new(
            Arc::clone(&store),
            synthesizer,
            Arc::new(DataUrlAudioStore),
            locks,
        ));
        Self {
            store,
            scripts,
            voiceovers,
            db,
        }
    }
}
