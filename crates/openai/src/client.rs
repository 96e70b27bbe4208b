//! HTTP client shared by the chat and speech endpoints.

use voxreel_core::generate::GenerateError;

use crate::config::OpenAiConfig;

/// Client for one OpenAI-compatible API endpoint.
///
/// Cheap to clone; holds a pooled `reqwest::Client` internally.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client from environment variables.
    pub fn from_env() -> Result<Self, crate::config::ConfigError> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }

    pub(crate) fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// POST a JSON body to `{base_url}{path}`, returning the raw response.
    ///
    /// Non-success statuses are turned into [`GenerateError::Api`] with the
    /// response body attached as the message.
    pub(crate) async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, GenerateError> {
        let response = self
            .http
            .post(format!("{}{path}", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%status, path, "OpenAI request rejected");
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }
        tracing::debug!(%status, path, "OpenAI request completed");
        Ok(response)
    }
}
