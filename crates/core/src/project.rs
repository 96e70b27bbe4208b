//! Project lifecycle status and content category enums.
//!
//! Both enums are stored as TEXT in the database and serialized with their
//! wire spelling (`script-ready`, `conspiracy`, ...). Parsing is
//! case-insensitive so values survive round-trips through clients that
//! normalize casing differently.

use serde::{Deserialize, Serialize};

use crate::prompt::PromptFamily;

// ---------------------------------------------------------------------------
// Lifecycle status
// ---------------------------------------------------------------------------

/// Production stage of a project.
///
/// Stages are strictly ordered: `Draft < ScriptReady < VoiceoverDone <
/// Complete`. Pipeline writes only ever move a project forward (see
/// [`advanced`](Self::advanced)); `Complete` is reached through the generic
/// update operation (manual marking), never by a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    ScriptReady,
    VoiceoverDone,
    Complete,
}

impl ProjectStatus {
    /// Wire/database spelling of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::ScriptReady => "script-ready",
            Self::VoiceoverDone => "voiceover-done",
            Self::Complete => "complete",
        }
    }

    /// Parse a stored status value. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "script-ready" => Some(Self::ScriptReady),
            "voiceover-done" => Some(Self::VoiceoverDone),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    /// The status to persist after a pipeline step that targets `target`.
    ///
    /// Returns `max(self, target)` in stage order, so a re-run of an earlier
    /// pipeline step never takes back a capability the project already has
    /// (e.g. regenerating the script of a `VoiceoverDone` project leaves the
    /// status at `VoiceoverDone`).
    pub fn advanced(self, target: ProjectStatus) -> ProjectStatus {
        self.max(target)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Content category
// ---------------------------------------------------------------------------

/// Content category of a project.
///
/// A closed set: unknown strings are rejected at the request boundary
/// rather than silently classified. Each category maps to exactly one
/// [`PromptFamily`] via [`family`](Self::family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Conspiracy,
    Horror,
    Paranormal,
    Mystery,
    Cryptid,
    Occult,
}

impl Category {
    /// Wire/database spelling of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conspiracy => "conspiracy",
            Self::Horror => "horror",
            Self::Paranormal => "paranormal",
            Self::Mystery => "mystery",
            Self::Cryptid => "cryptid",
            Self::Occult => "occult",
        }
    }

    /// Parse a stored category value. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "conspiracy" => Some(Self::Conspiracy),
            "horror" => Some(Self::Horror),
            "paranormal" => Some(Self::Paranormal),
            "mystery" => Some(Self::Mystery),
            "cryptid" => Some(Self::Cryptid),
            "occult" => Some(Self::Occult),
            _ => None,
        }
    }

    /// The prompt family that narrates this category.
    ///
    /// Exhaustive by construction; a future category variant should default
    /// to [`PromptFamily::Horror`] unless it is investigative in nature.
    pub fn family(self) -> PromptFamily {
        match self {
            Self::Conspiracy | Self::Paranormal | Self::Mystery => PromptFamily::Conspiracy,
            Self::Horror | Self::Cryptid | Self::Occult => PromptFamily::Horror,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Status ordering / advancement --

    #[test]
    fn status_order_matches_pipeline_stages() {
        assert!(ProjectStatus::Draft < ProjectStatus::ScriptReady);
        assert!(ProjectStatus::ScriptReady < ProjectStatus::VoiceoverDone);
        assert!(ProjectStatus::VoiceoverDone < ProjectStatus::Complete);
    }

    #[test]
    fn advanced_moves_draft_forward() {
        assert_eq!(
            ProjectStatus::Draft.advanced(ProjectStatus::ScriptReady),
            ProjectStatus::ScriptReady
        );
    }

    #[test]
    fn advanced_never_regresses() {
        assert_eq!(
            ProjectStatus::VoiceoverDone.advanced(ProjectStatus::ScriptReady),
            ProjectStatus::VoiceoverDone
        );
        assert_eq!(
            ProjectStatus::Complete.advanced(ProjectStatus::VoiceoverDone),
            ProjectStatus::Complete
        );
    }

    #[test]
    fn advanced_is_idempotent_at_same_stage() {
        assert_eq!(
            ProjectStatus::ScriptReady.advanced(ProjectStatus::ScriptReady),
            ProjectStatus::ScriptReady
        );
    }

    #[test]
    fn status_round_trips_through_wire_spelling() {
        for status in [
            ProjectStatus::Draft,
            ProjectStatus::ScriptReady,
            ProjectStatus::VoiceoverDone,
            ProjectStatus::Complete,
        ] {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            ProjectStatus::parse("Script-Ready"),
            Some(ProjectStatus::ScriptReady)
        );
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert_eq!(ProjectStatus::parse("published"), None);
    }

    // -- Category family mapping --

    #[test]
    fn investigative_categories_use_conspiracy_family() {
        assert_eq!(Category::Conspiracy.family(), PromptFamily::Conspiracy);
        assert_eq!(Category::Paranormal.family(), PromptFamily::Conspiracy);
        assert_eq!(Category::Mystery.family(), PromptFamily::Conspiracy);
    }

    #[test]
    fn atmospheric_categories_use_horror_family() {
        assert_eq!(Category::Horror.family(), PromptFamily::Horror);
        assert_eq!(Category::Cryptid.family(), PromptFamily::Horror);
        assert_eq!(Category::Occult.family(), PromptFamily::Horror);
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("PARANORMAL"), Some(Category::Paranormal));
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert_eq!(Category::parse("romance"), None);
    }
}
