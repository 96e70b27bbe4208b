//! Script prompt composition.
//!
//! Each prompt family carries a fixed system instruction that sets the
//! narrative register and safety posture; the user instruction embeds the
//! project's attributes plus the structural requirements every script must
//! satisfy (opening hook, scene markers, pacing cues, closing call-to-action).

// ---------------------------------------------------------------------------
// Prompt families
// ---------------------------------------------------------------------------

/// System-prompt family a category is narrated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFamily {
    /// Investigative register: documented mysteries, open questions.
    Conspiracy,
    /// Atmospheric register: tension, dread, the unexplained.
    Horror,
}

impl PromptFamily {
    /// Label used inside the user instruction ("Create a {label} script...").
    pub fn label(self) -> &'static str {
        match self {
            Self::Conspiracy => "conspiracy",
            Self::Horror => "horror",
        }
    }

    /// The fixed system instruction for this family.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::Conspiracy => CONSPIRACY_SYSTEM_PROMPT,
            Self::Horror => HORROR_SYSTEM_PROMPT,
        }
    }
}

const CONSPIRACY_SYSTEM_PROMPT: &str = "You are an expert conspiracy theory researcher and short-form video content creator. Create compelling, well-researched conspiracy theory scripts that are engaging but responsible. Focus on historical mysteries, unexplained phenomena, and thought-provoking questions rather than harmful misinformation.";

const HORROR_SYSTEM_PROMPT: &str = "You are a master horror storyteller and short-form video content creator. Create atmospheric, spine-chilling scripts that build tension and fear through psychological elements, mysterious circumstances, and unsettling scenarios.";

// ---------------------------------------------------------------------------
// Generation parameters
// ---------------------------------------------------------------------------

/// Sampling temperature for script generation.
pub const SCRIPT_TEMPERATURE: f32 = 0.8;

/// Output-length ceiling for script generation, in tokens.
pub const SCRIPT_MAX_TOKENS: u32 = 3000;

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Project attributes a script prompt is composed from.
#[derive(Debug)]
pub struct PromptSpec<'a> {
    pub family: PromptFamily,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub word_budget: &'a str,
    pub tone: &'a str,
}

/// A composed generation request: system + user instruction pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPrompt {
    pub system: String,
    pub user: String,
}

/// Compose the full script-generation prompt for a project.
pub fn compose_script_prompt(spec: &PromptSpec<'_>) -> ScriptPrompt {
    let description = if spec.description.trim().is_empty() {
        "No specific description provided"
    } else {
        spec.description
    };

    let user = format!(
        "Create a {family} script for a short-form video with the following specifications:\n\
         \n\
         Title: {title}\n\
         Description: {description}\n\
         Category: {category}\n\
         Target Length: {word_budget}\n\
         Tone: {tone}\n\
         \n\
         Requirements:\n\
         - Create an engaging hook in the first 30 seconds\n\
         - Structure with clear sections using [Scene X: Title] markers\n\
         - Include natural speaking patterns and pauses\n\
         - End with a call-to-action for subscribers and comments\n\
         - Make it {tone} in tone throughout\n\
         - Ensure content is engaging and platform-friendly\n\
         \n\
         The script should be ready for voiceover recording with proper pacing and dramatic timing.",
        family = spec.family.label(),
        title = spec.title,
        description = description,
        category = spec.category,
        word_budget = spec.word_budget,
        tone = spec.tone,
    );

    ScriptPrompt {
        system: spec.family.system_prompt().to_string(),
        user,
    }
}
