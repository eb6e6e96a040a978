/// Front matter fence line
pub const FENCE: &str = "---";

/// Remove a leading `---` delimited front matter block.
///
/// The text comes back unchanged when it has fewer than three lines, does not
/// open with a fence line, or never closes the block. A malformed header never
/// costs the note its content.
pub fn strip_front_matter(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < 3 || lines[0] != FENCE {
        return text.to_string();
    }

    match lines.iter().skip(1).position(|line| *line == FENCE) {
        Some(offset) => lines[offset + 2..].join("\n"),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_front_matter_basic() {
        let text = "---\ntitle: hello\ntags: [a]\n---\n# Heading\nContent";
        assert_eq!(strip_front_matter(text), "# Heading\nContent");
    }

    #[test]
    fn test_strip_front_matter_crlf() {
        let text = "---\r\ntitle: hello\r\n---\r\nBody\r\nMore";
        assert_eq!(strip_front_matter(text), "Body\nMore");
    }

    #[test]
    fn test_strip_front_matter_unterminated_is_unchanged() {
        let text = "---\ntitle: hello\n# Heading\nContent";
        assert_eq!(strip_front_matter(text), text);
    }

    #[test]
    fn test_strip_front_matter_no_fence() {
        let text = "# Heading\n---\nContent\n---";
        assert_eq!(strip_front_matter(text), text);
    }

    #[test]
    fn test_strip_front_matter_too_short() {
        assert_eq!(strip_front_matter("---\n---"), "---\n---");
    }

    #[test]
    fn test_strip_front_matter_fence_must_be_exact() {
        let text = "--- \ntitle: x\n---\nBody";
        assert_eq!(strip_front_matter(text), text);
    }

    #[test]
    fn test_strip_front_matter_empty_block() {
        assert_eq!(strip_front_matter("---\n---\nBody"), "Body");
    }

    #[test]
    fn test_strip_front_matter_nothing_after_close() {
        assert_eq!(strip_front_matter("---\nkey: v\n---"), "");
    }
}
