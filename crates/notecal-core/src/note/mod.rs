//! Note text preparation for the title generator

mod frontmatter;

pub use frontmatter::{strip_front_matter, FENCE};

use crate::text::{collapse, truncate_chars};

/// Default character budget for note text sent to the generator
pub const DEFAULT_MAX_NOTE_CHARS: usize = 4000;

/// Prepare note text for the generator prompt.
///
/// Strips front matter, collapses all whitespace to single spaces and, when
/// `max_chars` is a positive bound, cuts the result to that many characters.
/// The cut ignores word boundaries and may split a word.
pub fn prepare(text: &str, max_chars: Option<usize>) -> String {
    let collapsed = collapse(&strip_front_matter(text));
    match max_chars {
        Some(max) if max > 0 => truncate_chars(&collapsed, max).to_string(),
        _ => collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_strips_and_collapses() {
        let text = "---\ntitle: x\n---\n# Heading\n\nSome   text\twith\nbreaks";
        assert_eq!(prepare(text, None), "# Heading Some text with breaks");
    }

    #[test]
    fn test_prepare_truncates_mid_word() {
        assert_eq!(prepare("roadmap planning", Some(5)), "roadm");
    }

    #[test]
    fn test_prepare_zero_budget_passes_through() {
        assert_eq!(prepare("  a  b  ", Some(0)), "a b");
    }

    #[test]
    fn test_prepare_shorter_than_budget() {
        assert_eq!(prepare("short note", Some(DEFAULT_MAX_NOTE_CHARS)), "short note");
    }
}
