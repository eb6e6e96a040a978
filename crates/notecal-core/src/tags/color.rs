use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{is_date_key, sanitize_map};
use crate::bail_invalid;
use crate::error::Result;

const DAY_PREFIX: &str = "day:";
const FILE_PREFIX: &str = "file:";

/// Color key for every note of a calendar day
pub fn day_key(date_str: &str) -> String {
    format!("{DAY_PREFIX}{date_str}")
}

/// Color key for a single file
pub fn file_key(path: &str) -> String {
    format!("{FILE_PREFIX}{path}")
}

/// `day:YYYY-MM-DD` or `file:<non-empty path>`
fn is_color_key(key: &str) -> bool {
    if let Some(date) = key.strip_prefix(DAY_PREFIX) {
        return is_date_key(date);
    }
    key.strip_prefix(FILE_PREFIX)
        .is_some_and(|path| !path.is_empty())
}

/// Canonicalize `#rgb` / `#rrggbb` (any case) to lowercase `#rrggbb`.
///
/// Anything else is rejected; there is no fallback color.
pub fn normalize_color(input: &str) -> Option<String> {
    let hex = input.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let hex = hex.to_ascii_lowercase();
    match hex.len() {
        3 => Some(hex.chars().fold(String::from("#"), |mut out, c| {
            out.push(c);
            out.push(c);
            out
        })),
        6 => Some(format!("#{hex}")),
        _ => None,
    }
}

/// Color tags keyed by `day:` or `file:` keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListItemColorTags {
    tags: IndexMap<String, String>,
}

impl ListItemColorTags {
    /// Keep only well-formed keys with valid colors, canonicalized
    pub fn sanitize(raw: &Value) -> Self {
        Self {
            tags: sanitize_map(raw, "color tags", is_color_key, |_, value| {
                normalize_color(value)
            }),
        }
    }

    /// Color for a list item; a file tag wins over its day's tag
    pub fn color_for(&self, date_str: &str, path: &str) -> Option<&str> {
        self.tags
            .get(&file_key(path))
            .or_else(|| self.tags.get(&day_key(date_str)))
            .map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// New map with `key` tagged `color`
    pub fn with_color(&self, key: &str, color: &str) -> Result<Self> {
        if !is_color_key(key) {
            bail_invalid!("color key (expected day:YYYY-MM-DD or file:<path>)", key);
        }
        let Some(color) = normalize_color(color) else {
            bail_invalid!("color (expected #rgb or #rrggbb)", color);
        };
        let mut next = self.clone();
        next.tags.insert(key.to_string(), color);
        Ok(next)
    }

    /// New map without `key`
    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.tags.shift_remove(key);
        next
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#0F3"), Some("#00ff33".to_string()));
        assert_eq!(normalize_color("#AbCdEf"), Some("#abcdef".to_string()));
        assert_eq!(normalize_color(" #123456 "), Some("#123456".to_string()));
    }

    #[test]
    fn test_normalize_color_rejects() {
        assert_eq!(normalize_color("#12345"), None);
        assert_eq!(normalize_color("123456"), None);
        assert_eq!(normalize_color("#ggg"), None);
        assert_eq!(normalize_color("#"), None);
        assert_eq!(normalize_color("red"), None);
    }

    #[test]
    fn test_is_color_key() {
        assert!(is_color_key("day:2025-12-15"));
        assert!(is_color_key("file:daily/2025-12-15.md"));
        assert!(!is_color_key("day:12-15"));
        assert!(!is_color_key("file:"));
        assert!(!is_color_key("2025-12-15"));
        assert!(!is_color_key("day:２０２５-１２-１５"));
    }

    #[test]
    fn test_sanitize_filters_and_canonicalizes() {
        let raw = json!({
            "day:2025-12-15": "#F00",
            "file:notes/a.md": "#00AA11",
            "day:bad": "#fff",
            "file:": "#fff",
            "day:2025-12-16": "#12345",
            "day:2025-12-17": 7
        });
        let tags = ListItemColorTags::sanitize(&raw);

        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("day:2025-12-15"), Some("#ff0000"));
        assert_eq!(tags.get("file:notes/a.md"), Some("#00aa11"));
    }

    #[test]
    fn test_color_for_prefers_file_tag() {
        let tags = ListItemColorTags::default()
            .with_color("day:2025-12-15", "#111")
            .unwrap()
            .with_color("file:daily/2025-12-15.md", "#222")
            .unwrap();

        assert_eq!(tags.color_for("2025-12-15", "daily/2025-12-15.md"), Some("#222222"));
        assert_eq!(tags.color_for("2025-12-15", "other.md"), Some("#111111"));
        assert_eq!(tags.color_for("2025-12-16", "other.md"), None);
    }

    #[test]
    fn test_with_color_rejects_invalid_input() {
        let tags = ListItemColorTags::default();
        assert!(tags.with_color("day:2025-12-15", "#12345").is_err());
        assert!(tags.with_color("week:2025-50", "#123").is_err());
    }

    #[test]
    fn test_without_removes_key() {
        let tags = ListItemColorTags::default()
            .with_color("day:2025-12-15", "#111")
            .unwrap();
        let cleared = tags.without("day:2025-12-15");
        assert!(cleared.is_empty());
        assert_eq!(tags.len(), 1);
    }
}
