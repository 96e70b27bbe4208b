//! Target-length policy: maps a project's declared length to the word-count
//! range embedded in generation requests.
//!
//! The table is fixed and the mapping is total: anything that is not a known
//! length falls back to the medium range, so a stale or hand-edited value can
//! never abort a generation run.

use serde::{Deserialize, Serialize};

/// Declared target length of a project's video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLength {
    Short,
    Medium,
    Long,
    Extended,
}

impl TargetLength {
    /// Wire/database spelling of this length.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Extended => "extended",
        }
    }

    /// Parse a stored length value. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }

    /// The word-count range used to bound script generation.
    pub fn word_budget(self) -> &'static str {
        match self {
            Self::Short => "300-500 words (1-3 minutes)",
            Self::Medium => "800-1200 words (5-10 minutes)",
            Self::Long => "1500-2500 words (10-20 minutes)",
            Self::Extended => "2500-4000 words (20-30 minutes)",
        }
    }
}

impl std::fmt::Display for TargetLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word budget for an arbitrary stored length value.
///
/// Total over all strings: unknown or empty values use the medium range.
pub fn word_budget_for(value: &str) -> &'static str {
    TargetLength::parse(value)
        .unwrap_or(TargetLength::Medium)
        .word_budget()
}
