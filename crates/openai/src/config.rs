//! OpenAI client configuration loaded from environment variables.

/// Configuration for the OpenAI client.
///
/// | Env Var             | Default                     |
/// |---------------------|-----------------------------|
/// | `OPENAI_API_KEY`    | required                    |
/// | `OPENAI_BASE_URL`   | `https://api.openai.com/v1` |
/// | `OPENAI_CHAT_MODEL` | `gpt-4`                     |
/// | `OPENAI_TTS_MODEL`  | `tts-1`                     |
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub tts_model: String,
}

/// Configuration failures that should stop the process at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

impl OpenAiConfig {
    /// Configuration with all defaults applied for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4".to_string(),
            tts_model: "tts-1".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A missing `OPENAI_API_KEY` is a hard error: the credential must be
    /// absent-loud, never a silent no-op at generation time.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(chat_model) = std::env::var("OPENAI_CHAT_MODEL") {
            config.chat_model = chat_model;
        }
        if let Ok(tts_model) = std::env::var("OPENAI_TTS_MODEL") {
            config.tts_model = tts_model;
        }
        Ok(config)
    }
}
