use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{is_date_key, sanitize_map};
use crate::bail_invalid;
use crate::error::Result;
use crate::text::{collapse, truncate_chars};

/// Default cap on a custom title suffix, in characters
pub const DEFAULT_CUSTOM_TITLE_MAX_LENGTH: usize = 240;

/// Characters allowed between a pasted date prefix and the title proper
const SEPARATORS: &[char] = &['-', '\u{2013}', '\u{2014}', ':', '|'];

/// Normalize user input into the suffix stored for `date_str`.
///
/// Users often paste the full label back ("2025-12-15 - ideas"), so a
/// leading copy of the date and the separators after it are removed. The
/// result is capped at `max_len` characters (0 disables the cap). An empty
/// result means "no custom title".
pub fn normalize_input(date_str: &str, input: &str, max_len: usize) -> String {
    let collapsed = collapse(input);

    let body = match collapsed.strip_prefix(date_str) {
        Some(rest) if !date_str.is_empty() => rest
            .trim_start_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
            .trim(),
        _ => collapsed.as_str(),
    };

    if max_len > 0 && body.chars().count() > max_len {
        truncate_chars(body, max_len).trim().to_string()
    } else {
        body.to_string()
    }
}

/// User-chosen title suffixes keyed by `YYYY-MM-DD`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomListTitles {
    titles: IndexMap<String, String>,
}

impl CustomListTitles {
    /// Keep date-keyed string entries whose normalized suffix is non-empty
    pub fn sanitize(raw: &Value, max_len: usize) -> Self {
        Self {
            titles: sanitize_map(raw, "custom titles", is_date_key, |key, value| {
                Some(normalize_input(key, value, max_len)).filter(|title| !title.is_empty())
            }),
        }
    }

    pub fn title_for(&self, date_str: &str) -> Option<&str> {
        self.titles.get(date_str).map(String::as_str)
    }

    /// New map with the normalized `input` stored for `date_str`; a blank
    /// result removes the entry instead
    pub fn with_title(&self, date_str: &str, input: &str, max_len: usize) -> Result<Self> {
        if !is_date_key(date_str) {
            bail_invalid!("date (expected YYYY-MM-DD)", date_str);
        }
        let title = normalize_input(date_str, input, max_len);
        if title.is_empty() {
            return Ok(self.without(date_str));
        }
        let mut next = self.clone();
        next.titles.insert(date_str.to_string(), title);
        Ok(next)
    }

    /// New map without a title for `date_str`
    pub fn without(&self, date_str: &str) -> Self {
        let mut next = self.clone();
        next.titles.shift_remove(date_str);
        next
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MAX: usize = DEFAULT_CUSTOM_TITLE_MAX_LENGTH;

    #[test]
    fn test_normalize_input_strips_date_prefix() {
        assert_eq!(
            normalize_input("2025-12-15", "2025-12-15 - reflection ideas daily", MAX),
            "reflection ideas daily"
        );
        assert_eq!(normalize_input("2025-12-15", "2025-12-15", MAX), "");
    }

    #[test]
    fn test_normalize_input_separator_variants() {
        for input in [
            "2025-12-15: standup",
            "2025-12-15 | standup",
            "2025-12-15 \u{2014} standup",
            "2025-12-15\u{2013}standup",
            "  2025-12-15   -  standup ",
        ] {
            assert_eq!(normalize_input("2025-12-15", input, MAX), "standup", "{input}");
        }
    }

    #[test]
    fn test_normalize_input_without_prefix() {
        assert_eq!(
            normalize_input("2025-12-15", "  planning\n session ", MAX),
            "planning session"
        );
        assert_eq!(
            normalize_input("2025-12-15", "2025-12-16 - other day", MAX),
            "2025-12-16 - other day"
        );
    }

    #[test]
    fn test_normalize_input_caps_length() {
        let input = format!("{} tail", "a".repeat(9));
        assert_eq!(normalize_input("2025-12-15", &input, 10), "a".repeat(9));
        assert_eq!(normalize_input("2025-12-15", &"b".repeat(300), MAX).len(), MAX);
        assert_eq!(normalize_input("2025-12-15", &"b".repeat(300), 0).len(), 300);
    }

    #[test]
    fn test_sanitize_custom_titles() {
        let raw = json!({
            "2025-12-15": "2025-12-15 - retro",
            "2025-12-16": "2025-12-16",
            "2025-12-17": ["not", "text"],
            "day:2025-12-18": "wrong key",
            "2025-12-19": "  launch  day "
        });
        let titles = CustomListTitles::sanitize(&raw, MAX);

        assert_eq!(titles.len(), 2);
        assert_eq!(titles.title_for("2025-12-15"), Some("retro"));
        assert_eq!(titles.title_for("2025-12-19"), Some("launch day"));
        assert_eq!(titles.title_for("2025-12-16"), None);
    }

    #[test]
    fn test_with_title_blank_removes() {
        let titles = CustomListTitles::default()
            .with_title("2025-12-15", "retro", MAX)
            .unwrap();
        assert_eq!(titles.title_for("2025-12-15"), Some("retro"));

        let cleared = titles.with_title("2025-12-15", " 2025-12-15 - ", MAX).unwrap();
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_with_title_rejects_bad_date() {
        let titles = CustomListTitles::default();
        assert!(titles.with_title("15/12/2025", "retro", MAX).is_err());
    }
}
