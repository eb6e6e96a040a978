//! Settings for notecal
//!
//! Settings live in `.notecal/config.toml` under the vault root. A missing
//! file means defaults; environment variables override the file.

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{NotecalError, Result};

pub use types::{Settings, DEFAULT_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_REQUEST_TIMEOUT_SECONDS};

const OLLAMA_URL_ENV_VAR: &str = "NOTECAL_OLLAMA_URL";
const MODEL_ENV_VAR: &str = "NOTECAL_MODEL";
const TIMEOUT_ENV_VAR: &str = "NOTECAL_TIMEOUT";

impl Settings {
    /// Title cache bound, `None` when unbounded
    pub fn cache_bound(&self) -> Option<usize> {
        usize::try_from(self.title_cache_max_entries)
            .ok()
            .filter(|max| *max > 0)
    }

    /// Note text budget, `None` when unlimited
    pub fn note_char_budget(&self) -> Option<usize> {
        Some(self.max_note_chars).filter(|max| *max > 0)
    }

    /// Load settings from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| NotecalError::io_operation("read config", path.display(), e))?;
        toml::from_str(&content).map_err(|e| NotecalError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load settings from a file, then apply environment overrides
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let mut settings = Self::load(path)?;
        settings.apply_overrides(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Apply `NOTECAL_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(OLLAMA_URL_ENV_VAR).filter(|s| !s.is_empty()) {
            self.ollama_url = url;
        }

        if let Some(model) = lookup(MODEL_ENV_VAR).filter(|s| !s.is_empty()) {
            self.model = model;
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV_VAR) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.request_timeout_seconds = seconds.clamp(5, 300);
            }
        }
    }

    /// Save settings to a file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NotecalError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.ollama_url, DEFAULT_OLLAMA_URL);
        assert_eq!(settings.cache_bound(), Some(500));
        assert_eq!(settings.note_char_budget(), Some(4000));
        assert!(settings.ai_titles);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = Settings::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".notecal").join("config.toml");

        let settings = Settings {
            daily_folder: "Journal".to_string(),
            model: "qwen2.5:7b".to_string(),
            title_cache_max_entries: 25,
            ..Default::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = \"mistral\"\nai_titles = false\n").unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.model, "mistral");
        assert!(!loaded.ai_titles);
        assert_eq!(loaded.max_note_chars, 4000);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_note_chars = \"lots\"").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, NotecalError::InvalidConfig { .. }));
    }

    #[test]
    fn test_non_positive_bounds_mean_unbounded() {
        let settings = Settings {
            title_cache_max_entries: -3,
            max_note_chars: 0,
            ..Default::default()
        };
        assert_eq!(settings.cache_bound(), None);
        assert_eq!(settings.note_char_budget(), None);

        let settings = Settings {
            title_cache_max_entries: 0,
            ..Default::default()
        };
        assert_eq!(settings.cache_bound(), None);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("NOTECAL_OLLAMA_URL", "http://gpu-box:11434"),
            ("NOTECAL_MODEL", ""),
            ("NOTECAL_TIMEOUT", "1000"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.ollama_url, "http://gpu-box:11434");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.request_timeout_seconds, 300);
    }
}
