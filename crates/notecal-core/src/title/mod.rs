//! Structured title parts: validation of generator output and label formatting

mod format;
mod recover;

pub use format::{format_custom_list_title, format_daily_title};
pub use recover::recover_json;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::text::{collapse, sanitize_word, truncate_chars};

/// Number of keywords in a daily title
pub const KEYWORD_COUNT: usize = 3;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_CHARS: usize = 120;

/// Validated decomposition of a generated daily title.
///
/// Only [`parse_parts`] builds one from untrusted input, so every instance
/// holds exactly three single-token keywords and a non-empty one-line
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTitleParts {
    pub keywords: [String; KEYWORD_COUNT],
    pub description: String,
}

static TRAILING_PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn trailing_punctuation() -> &'static Regex {
    TRAILING_PUNCTUATION.get_or_init(|| {
        Regex::new(r"[.!?]{2,}$").expect("trailing punctuation pattern is valid")
    })
}

/// Normalize a description to one capped line.
///
/// Whitespace collapses to single spaces, the text is cut to
/// [`MAX_DESCRIPTION_CHARS`] and re-trimmed, and a trailing run of two or more
/// `.`, `!` or `?` becomes a single period.
pub fn sanitize_description(description: &str) -> String {
    let collapsed = collapse(description);
    let capped = truncate_chars(&collapsed, MAX_DESCRIPTION_CHARS).trim_end();
    trailing_punctuation().replace(capped, ".").into_owned()
}

/// Validate a decoded model response into [`DailyTitleParts`].
///
/// All-or-nothing: `None` when the value is not an object, `keywords` is not
/// an array, `description` is not a string, fewer than three keywords survive
/// sanitization, or the description sanitizes to nothing. Extra keywords are
/// dropped in source order. Non-string keywords count as empty.
pub fn parse_parts(value: &Value) -> Option<DailyTitleParts> {
    let object = value.as_object()?;
    let raw_keywords = object.get("keywords")?.as_array()?;
    let raw_description = object.get("description")?.as_str()?;

    let mut keywords = raw_keywords
        .iter()
        .map(|kw| kw.as_str().map(sanitize_word).unwrap_or_default())
        .filter(|kw| !kw.is_empty());

    let keywords = [keywords.next()?, keywords.next()?, keywords.next()?];

    let description = sanitize_description(raw_description);
    if description.is_empty() {
        return None;
    }

    Some(DailyTitleParts {
        keywords,
        description,
    })
}
