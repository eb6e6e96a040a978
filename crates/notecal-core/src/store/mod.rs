//! Persistence of the title cache, color tags and custom titles
//!
//! The data file holds a versioned envelope:
//!
//! ```json
//! { "version": 1, "titleCache": {...}, "listItemColorTags": {...}, "customListTitles": {...} }
//! ```
//!
//! Older files were one flat object with the same three keys mixed in among
//! settings. Both shapes are split into the three raw payloads first, and
//! each payload then goes through its own sanitizer.

pub mod paths;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::TitleCache;
use crate::config::Settings;
use crate::error::{NotecalError, Result};
use crate::tags::{CustomListTitles, ListItemColorTags};

/// Current data file format version
pub const DATA_FORMAT_VERSION: u32 = 1;

const TITLE_CACHE_KEY: &str = "titleCache";
const COLOR_TAGS_KEY: &str = "listItemColorTags";
const CUSTOM_TITLES_KEY: &str = "customListTitles";

/// Raw, unvalidated sub-payloads pulled out of a data file
#[derive(Debug, Default, PartialEq)]
pub struct RawPayloads {
    pub title_cache: Value,
    pub color_tags: Value,
    pub custom_titles: Value,
}

impl RawPayloads {
    /// Split a decoded data file into its three payloads.
    ///
    /// Versioned envelopes and legacy flat objects carry the payloads under
    /// the same keys; anything that is not an object has none.
    pub fn demux(document: &Value) -> Self {
        let Some(object) = document.as_object() else {
            return Self::default();
        };

        match object.get("version").and_then(Value::as_u64) {
            Some(version) if version > u64::from(DATA_FORMAT_VERSION) => {
                warn!(version, "data file is newer than this build, reading known keys");
            }
            Some(_) => {}
            None => debug!("legacy flat data file"),
        }

        let take = |key: &str| object.get(key).cloned().unwrap_or(Value::Null);
        Self {
            title_cache: take(TITLE_CACHE_KEY),
            color_tags: take(COLOR_TAGS_KEY),
            custom_titles: take(CUSTOM_TITLES_KEY),
        }
    }
}

/// Everything notecal persists for a vault
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluginData {
    #[serde(rename = "titleCache")]
    pub title_cache: TitleCache,
    #[serde(rename = "listItemColorTags")]
    pub color_tags: ListItemColorTags,
    #[serde(rename = "customListTitles")]
    pub custom_titles: CustomListTitles,
}

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    #[serde(flatten)]
    data: &'a PluginData,
}

impl PluginData {
    /// Sanitize raw payloads into validated stores
    pub fn from_raw(raw: &RawPayloads, settings: &Settings) -> Self {
        Self {
            title_cache: TitleCache::sanitize(&raw.title_cache),
            color_tags: ListItemColorTags::sanitize(&raw.color_tags),
            custom_titles: CustomListTitles::sanitize(
                &raw.custom_titles,
                settings.custom_title_max_length,
            ),
        }
    }

    /// Load a data file. A missing file is empty data; so is an unreadable
    /// or non-JSON one, after a warning, so corrupt state never blocks startup.
    pub fn load(path: &Path, settings: &Settings) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| NotecalError::io_operation("read data file", path.display(), e))?;

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "data file is not valid JSON, starting empty");
                return Ok(Self::default());
            }
        };

        let data = Self::from_raw(&RawPayloads::demux(&document), settings);
        debug!(
            titles = data.title_cache.len(),
            colors = data.color_tags.len(),
            custom_titles = data.custom_titles.len(),
            "loaded data file"
        );
        Ok(data)
    }

    /// Prune the title cache to the configured bound and write the
    /// versioned envelope
    pub fn save(&self, path: &Path, settings: &Settings) -> Result<()> {
        let pruned = Self {
            title_cache: self.title_cache.prune(settings.cache_bound()).into_owned(),
            ..self.clone()
        };

        let envelope = Envelope {
            version: DATA_FORMAT_VERSION,
            data: &pruned,
        };
        let content = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| NotecalError::io_operation("create", parent.display(), e))?;
        }
        fs::write(path, content)
            .map_err(|e| NotecalError::io_operation("write data file", path.display(), e))?;
        Ok(())
    }

    /// Same data with an empty title cache
    pub fn with_cleared_titles(&self) -> Self {
        Self {
            title_cache: TitleCache::new(),
            ..self.clone()
        }
    }
}
