//! Blocking client for a local Ollama server

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::prompt::response_schema;
use super::TitleGenerator;
use crate::config::Settings;
use crate::error::{NotecalError, Result};

/// Sampling temperature for title requests; titles should be stable
const TITLE_TEMPERATURE: f64 = 0.2;

/// Connection settings for the inference server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    /// Server base URL, e.g. `http://127.0.0.1:11434`
    pub base_url: String,
    /// Model name passed with every request
    pub model: String,
    /// Whole-request timeout in seconds
    pub timeout_seconds: u64,
}

impl From<&Settings> for OllamaConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.ollama_url.clone(),
            model: settings.model.clone(),
            timeout_seconds: settings.request_timeout_seconds,
        }
    }
}

/// HTTP client for `/api/generate` and `/api/tags`
pub struct OllamaClient {
    config: OllamaConfig,
    agent: ureq::Agent,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .build();
        Self {
            config,
            agent: ureq::Agent::new_with_config(agent_config),
        }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Request body for a non-streaming structured-output generation
    pub fn generate_request(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "format": response_schema(),
            "options": {"temperature": TITLE_TEMPERATURE}
        })
    }

    /// Names of the models installed on the server
    pub fn list_models(&self) -> Result<Vec<String>> {
        let url = self.endpoint("api/tags");
        debug!(url = %url, "listing models");
        let mut response = self.agent.get(&url).call()?;
        let body = response.body_mut().read_to_string()?;
        extract_model_names(&body)
    }
}

impl TitleGenerator for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint("api/generate");
        debug!(url = %url, model = %self.config.model, "posting generate request");

        let payload = self.generate_request(prompt).to_string();
        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(payload)?;
        let body = response.body_mut().read_to_string()?;
        extract_generate_response(&body)
    }
}

#[derive(Deserialize)]
struct GenerateEnvelope {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull the raw model text out of an `/api/generate` reply
pub fn extract_generate_response(body: &str) -> Result<String> {
    let envelope: GenerateEnvelope = serde_json::from_str(body)
        .map_err(|e| NotecalError::Generator(format!("malformed generate reply: {e}")))?;

    if let Some(error) = envelope.error {
        return Err(NotecalError::Generator(error));
    }
    envelope
        .response
        .ok_or_else(|| NotecalError::Generator("generate reply has no response field".into()))
}

#[derive(Deserialize)]
struct TagsEnvelope {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

/// Model names from an `/api/tags` reply, sorted
pub fn extract_model_names(body: &str) -> Result<Vec<String>> {
    let envelope: TagsEnvelope = serde_json::from_str(body)
        .map_err(|e| NotecalError::Generator(format!("malformed tags reply: {e}")))?;
    let mut names: Vec<String> = envelope.models.into_iter().map(|m| m.name).collect();
    names.sort();
    Ok(names)
}
