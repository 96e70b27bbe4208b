//! Orchestrator tests against the in-memory store and stub capabilities:
//! - success paths persist content + advanced status in one write
//! - every failure mode leaves the project byte-for-byte unchanged
//! - voiceover precondition and default-voice behaviour
//! - the full draft -> script-ready -> voiceover-done scenario

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use tokio::sync::Mutex;
use voxreel_core::generate::{
    GenerateError, SpeechRequest, SpeechSynthesizer, TextGenerator, TextRequest,
};
use voxreel_core::policy::TargetLength;
use voxreel_core::project::{Category, ProjectStatus};
use voxreel_core::prompt::PromptFamily;
use voxreel_db::models::project::{CreateProject, Project, UpdateProject};
use voxreel_db::store::{MemoryProjectStore, ProjectStore};
use voxreel_pipeline::{
    DataUrlAudioStore, PipelineError, ProjectLocks, ScriptPipeline, VoiceoverPipeline,
};

// ---------------------------------------------------------------------------
// Stub capabilities
// ---------------------------------------------------------------------------

/// Returns fixed text and records the request it was given.
struct FixedTextGenerator {
    text: &'static str,
    last_request: Mutex<Option<TextRequest>>,
}

impl FixedTextGenerator {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextGenerator for FixedTextGenerator {
    async fn generate(&self, request: &TextRequest) -> Result<String, GenerateError> {
        *self.last_request.lock().await = Some(request.clone());
        Ok(self.text.to_string())
    }
}

/// Simulates a transient capability outage.
struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(&self, _request: &TextRequest) -> Result<String, GenerateError> {
        Err(GenerateError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })
    }
}

/// Returns fixed bytes and records the request it was given.
struct FixedSynthesizer {
    bytes: &'static [u8],
    last_request: Mutex<Option<SpeechRequest>>,
}

impl FixedSynthesizer {
    fn new(bytes: &'static [u8]) -> Self {
        Self {
            bytes,
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for FixedSynthesizer {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, GenerateError> {
        *self.last_request.lock().await = Some(request.clone());
        Ok(self.bytes.to_vec())
    }
}

struct FailingSynthesizer;

#[async_trait]
impl SpeechSynthesizer for FailingSynthesizer {
    async fn synthesize(&self, _request: &SpeechRequest) -> Result<Vec<u8>, GenerateError> {
        Err(GenerateError::Transport("connection reset".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn skinwalker_ranch() -> CreateProject {
    CreateProject {
        title: "Skinwalker Ranch".to_string(),
        description: "Strange lights over a Utah ranch".to_string(),
        category: Category::Paranormal,
        target_length: TargetLength::Short,
        tone: "eerie".to_string(),
    }
}

fn script_pipeline(
    store: &Arc<MemoryProjectStore>,
    generator: Arc<dyn TextGenerator>,
) -> ScriptPipeline {
    ScriptPipeline::new(
        Arc::clone(store) as Arc<dyn ProjectStore>,
        generator,
        Arc::new(ProjectLocks::new()),
    )
}

fn voiceover_pipeline(
    store: &Arc<MemoryProjectStore>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> VoiceoverPipeline {
    VoiceoverPipeline::new(
        Arc::clone(store) as Arc<dyn ProjectStore>,
        synthesizer,
        Arc::new(DataUrlAudioStore),
        Arc::new(ProjectLocks::new()),
    )
}

async fn project_with_script(store: &Arc<MemoryProjectStore>) -> Project {
    let created = store.create(skinwalker_ranch()).await.unwrap();
    store
        .update(
            created.id,
            UpdateProject {
                script: Some("The ranch sits silent at dusk.".to_string()),
                status: Some(ProjectStatus::ScriptReady),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Script generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn script_success_persists_text_and_advances_status() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    let generator = Arc::new(FixedTextGenerator::new("HOOK...CONCLUSION"));
    let pipeline = script_pipeline(&store, Arc::clone(&generator) as Arc<dyn TextGenerator>);

    let outcome = pipeline.generate(created.id).await.unwrap();

    assert_eq!(outcome.script, "HOOK...CONCLUSION");
    assert_eq!(outcome.project.status, ProjectStatus::ScriptReady);

    let stored = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.script.as_deref(), Some("HOOK...CONCLUSION"));
    assert_eq!(stored.status, ProjectStatus::ScriptReady);
}

#[tokio::test]
async fn script_request_carries_family_prompt_and_word_budget() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    let generator = Arc::new(FixedTextGenerator::new("text"));
    let pipeline = script_pipeline(&store, Arc::clone(&generator) as Arc<dyn TextGenerator>);

    pipeline.generate(created.id).await.unwrap();

    let request = generator.last_request.lock().await.take().unwrap();
    // Paranormal classifies into the conspiracy family.
    assert_eq!(request.system, PromptFamily::Conspiracy.system_prompt());
    assert!(request.user.contains("Title: Skinwalker Ranch"));
    assert!(request.user.contains("300-500 words (1-3 minutes)"));
    assert!(request.user.contains("Tone: eerie"));
}

#[tokio::test]
async fn script_unknown_project_is_not_found() {
    let store = Arc::new(MemoryProjectStore::new());
    let pipeline = script_pipeline(&store, Arc::new(FixedTextGenerator::new("text")));

    let result = pipeline.generate(uuid::Uuid::new_v4()).await;
    assert_matches!(result, Err(PipelineError::NotFound(_)));
}

#[tokio::test]
async fn script_failure_leaves_project_unchanged_each_time() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    let pipeline = script_pipeline(&store, Arc::new(FailingTextGenerator));

    // Two consecutive failing runs; the project must be identical to its
    // pre-call state after each one.
    for _ in 0..2 {
        let result = pipeline.generate(created.id).await;
        assert_matches!(result, Err(PipelineError::Generation(_)));
        assert_eq!(store.get(created.id).await.unwrap().unwrap(), created);
    }
}

#[tokio::test]
async fn script_empty_output_fails_without_a_write() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    let pipeline = script_pipeline(&store, Arc::new(FixedTextGenerator::new("   \n")));

    let result = pipeline.generate(created.id).await;
    assert_matches!(
        result,
        Err(PipelineError::Generation(GenerateError::Empty))
    );
    assert_eq!(store.get(created.id).await.unwrap().unwrap(), created);
}

#[tokio::test]
async fn script_regeneration_never_regresses_status() {
    let store = Arc::new(MemoryProjectStore::new());
    let project = project_with_script(&store).await;
    store
        .update(
            project.id,
            UpdateProject {
                audio_url: Some("data:audio/mpeg;base64,AQID".to_string()),
                status: Some(ProjectStatus::VoiceoverDone),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    let pipeline = script_pipeline(&store, Arc::new(FixedTextGenerator::new("A fresh take")));
    let outcome = pipeline.generate(project.id).await.unwrap();

    assert_eq!(outcome.project.script.as_deref(), Some("A fresh take"));
    assert_eq!(outcome.project.status, ProjectStatus::VoiceoverDone);
}

// ---------------------------------------------------------------------------
// Voiceover generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn voiceover_success_persists_data_url_and_advances_status() {
    let store = Arc::new(MemoryProjectStore::new());
    let project = project_with_script(&store).await;
    let synthesizer = Arc::new(FixedSynthesizer::new(&[1, 2, 3]));
    let pipeline =
        voiceover_pipeline(&store, Arc::clone(&synthesizer) as Arc<dyn SpeechSynthesizer>);

    let outcome = pipeline.generate(project.id, None).await.unwrap();

    // [1, 2, 3] encodes to AQID.
    assert_eq!(outcome.audio_url, "data:audio/mpeg;base64,AQID");
    assert_eq!(outcome.project.status, ProjectStatus::VoiceoverDone);

    let stored = store.get(project.id).await.unwrap().unwrap();
    assert_eq!(stored.audio_url.as_deref(), Some("data:audio/mpeg;base64,AQID"));
}

#[tokio::test]
async fn voiceover_uses_default_voice_and_full_script() {
    let store = Arc::new(MemoryProjectStore::new());
    let project = project_with_script(&store).await;
    let synthesizer = Arc::new(FixedSynthesizer::new(b"mp3"));
    let pipeline =
        voiceover_pipeline(&store, Arc::clone(&synthesizer) as Arc<dyn SpeechSynthesizer>);

    pipeline.generate(project.id, None).await.unwrap();

    let request = synthesizer.last_request.lock().await.take().unwrap();
    assert_eq!(request.voice, "onyx");
    assert_eq!(request.text, "The ranch sits silent at dusk.");
}

#[tokio::test]
async fn voiceover_honours_requested_voice() {
    let store = Arc::new(MemoryProjectStore::new());
    let project = project_with_script(&store).await;
    let synthesizer = Arc::new(FixedSynthesizer::new(b"mp3"));
    let pipeline =
        voiceover_pipeline(&store, Arc::clone(&synthesizer) as Arc<dyn SpeechSynthesizer>);

    pipeline
        .generate(project.id, Some("nova".to_string()))
        .await
        .unwrap();

    let request = synthesizer.last_request.lock().await.take().unwrap();
    assert_eq!(request.voice, "nova");
}

#[tokio::test]
async fn voiceover_without_script_fails_precondition_unchanged() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    let pipeline = voiceover_pipeline(&store, Arc::new(FixedSynthesizer::new(b"mp3")));

    let result = pipeline.generate(created.id, None).await;
    assert_matches!(result, Err(PipelineError::MissingScript(id)) if id == created.id);
    assert_eq!(store.get(created.id).await.unwrap().unwrap(), created);
}

#[tokio::test]
async fn voiceover_unknown_project_is_not_found() {
    let store = Arc::new(MemoryProjectStore::new());
    let pipeline = voiceover_pipeline(&store, Arc::new(FixedSynthesizer::new(b"mp3")));

    let result = pipeline.generate(uuid::Uuid::new_v4(), None).await;
    assert_matches!(result, Err(PipelineError::NotFound(_)));
}

#[tokio::test]
async fn voiceover_failure_leaves_project_unchanged() {
    let store = Arc::new(MemoryProjectStore::new());
    let project = project_with_script(&store).await;
    let pipeline = voiceover_pipeline(&store, Arc::new(FailingSynthesizer));

    let result = pipeline.generate(project.id, None).await;
    assert_matches!(result, Err(PipelineError::Generation(_)));
    assert_eq!(store.get(project.id).await.unwrap().unwrap(), project);
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn draft_to_voiceover_done_end_to_end() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    assert_eq!(created.status, ProjectStatus::Draft);

    let scripts = script_pipeline(&store, Arc::new(FixedTextGenerator::new("HOOK...CONCLUSION")));
    let after_script = scripts.generate(created.id).await.unwrap();
    assert_eq!(after_script.project.status, ProjectStatus::ScriptReady);
    assert_eq!(after_script.project.script.as_deref(), Some("HOOK...CONCLUSION"));

    let voiceovers = voiceover_pipeline(&store, Arc::new(FixedSynthesizer::new(&[1, 2, 3])));
    let after_voiceover = voiceovers.generate(created.id, None).await.unwrap();
    assert_eq!(after_voiceover.project.status, ProjectStatus::VoiceoverDone);
    assert_eq!(
        after_voiceover.project.audio_url.as_deref(),
        Some("data:audio/mpeg;base64,AQID")
    );
    // The script generated earlier is untouched by the voiceover run.
    assert_eq!(
        after_voiceover.project.script.as_deref(),
        Some("HOOK...CONCLUSION")
    );
}

#[tokio::test]
async fn deleted_project_fails_generation_with_not_found() {
    let store = Arc::new(MemoryProjectStore::new());
    let created = store.create(skinwalker_ranch()).await.unwrap();
    assert!(store.delete(created.id).await.unwrap());

    let pipeline = script_pipeline(&store, Arc::new(FixedTextGenerator::new("text")));
    let result = pipeline.generate(created.id).await;
    assert_matches!(result, Err(PipelineError::NotFound(id)) if id == created.id);
}
