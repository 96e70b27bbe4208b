//! The project generation pipeline: the script and voiceover orchestrators
//! plus the seams they depend on.
//!
//! Each orchestrator reads the project fresh, builds a request from its
//! attributes, invokes the injected capability, validates the result, and
//! persists content plus status in a single store write. A failed run writes
//! nothing. Runs against the same project are serialized by
//! [`lock::ProjectLocks`].

pub mod audio;
pub mod error;
pub mod lock;
pub mod script;
pub mod voiceover;

pub use audio::{AudioStore, DataUrlAudioStore};
pub use error::PipelineError;
pub use lock::ProjectLocks;
pub use script::{ScriptOutcome, ScriptPipeline};
pub use voiceover::{VoiceoverOutcome, VoiceoverPipeline};
