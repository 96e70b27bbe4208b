//! Voice selection constants and validation for speech synthesis.

use crate::error::CoreError;

/// Voice used when a voiceover request does not name one.
pub const DEFAULT_VOICE: &str = "onyx";

/// All voices the synthesis capability accepts.
pub const VALID_VOICES: &[&str] = &["alloy", "echo", "fable", "onyx", "nova", "shimmer"];

/// Validate that a requested voice is one of the known identifiers.
pub fn validate_voice(voice: &str) -> Result<(), CoreError> {
    if VALID_VOICES.contains(&voice) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid voice '{voice}'. Must be one of: {}",
            VALID_VOICES.join(", ")
        )))
    }
}
