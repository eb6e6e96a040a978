//! Per-day list decorations: color tags and custom titles
//!
//! Both stores follow the title cache's discipline: untrusted persisted maps
//! are filtered entry by entry through a key grammar and a value validator,
//! and every update returns a new map.

mod color;
mod custom;

pub use color::{day_key, file_key, normalize_color, ListItemColorTags};
pub use custom::{normalize_input, CustomListTitles, DEFAULT_CUSTOM_TITLE_MAX_LENGTH};

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static DATE_KEY: OnceLock<Regex> = OnceLock::new();

/// `YYYY-MM-DD` shape check (ASCII digits only, no calendar validation)
pub fn is_date_key(key: &str) -> bool {
    DATE_KEY
        .get_or_init(|| {
            Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date key pattern is valid")
        })
        .is_match(key)
}

/// Keep the entries of an untrusted map whose key passes `key_ok` and whose
/// value `normalize` accepts
fn sanitize_map<F>(
    raw: &Value,
    what: &str,
    key_ok: impl Fn(&str) -> bool,
    normalize: F,
) -> IndexMap<String, String>
where
    F: Fn(&str, &str) -> Option<String>,
{
    let Some(map) = raw.as_object() else {
        return IndexMap::new();
    };

    let kept: IndexMap<String, String> = map
        .iter()
        .filter(|(key, _)| key_ok(key))
        .filter_map(|(key, value)| {
            let normalized = normalize(key, value.as_str()?)?;
            Some((key.clone(), normalized))
        })
        .collect();

    let dropped = map.len() - kept.len();
    if dropped > 0 {
        debug!(dropped, kept = kept.len(), what, "dropped invalid entries");
    }
    kept
}
