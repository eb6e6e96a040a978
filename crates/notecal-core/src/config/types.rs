//! Settings type definitions

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_MAX_ENTRIES;
use crate::note::DEFAULT_MAX_NOTE_CHARS;
use crate::tags::DEFAULT_CUSTOM_TITLE_MAX_LENGTH;

/// Default inference server URL
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default model for title generation
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Default request timeout for title generation
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Plugin settings (`.notecal/config.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Folder holding daily notes, relative to the vault root ("" = root)
    #[serde(default)]
    pub daily_folder: String,

    /// chrono format of daily note file names
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Show generated titles in the list view
    #[serde(default = "default_true")]
    pub ai_titles: bool,

    /// Inference server base URL
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Model used for title generation
    #[serde(default = "default_model")]
    pub model: String,

    /// Character budget of note text sent to the model (0 = unlimited)
    #[serde(default = "default_max_note_chars")]
    pub max_note_chars: usize,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// Maximum cached titles (0 or negative = unbounded)
    #[serde(default = "default_title_cache_max_entries")]
    pub title_cache_max_entries: i64,

    /// Maximum custom title length in characters
    #[serde(default = "default_custom_title_max_length")]
    pub custom_title_max_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_folder: String::new(),
            date_format: default_date_format(),
            ai_titles: true,
            ollama_url: default_ollama_url(),
            model: default_model(),
            max_note_chars: default_max_note_chars(),
            request_timeout_seconds: default_request_timeout_seconds(),
            title_cache_max_entries: default_title_cache_max_entries(),
            custom_title_max_length: default_custom_title_max_length(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

fn default_ollama_url() -> String {
    DEFAULT_OLLAMA_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_note_chars() -> usize {
    DEFAULT_MAX_NOTE_CHARS
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_title_cache_max_entries() -> i64 {
    DEFAULT_MAX_ENTRIES as i64
}

fn default_custom_title_max_length() -> usize {
    DEFAULT_CUSTOM_TITLE_MAX_LENGTH
}
