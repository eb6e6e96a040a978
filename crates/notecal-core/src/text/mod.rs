//! Text normalization utilities shared by the title parser, the note
//! preprocessor and the custom-title sanitizer

/// Collapse every whitespace run (including CR, LF and tab) into a single
/// space and trim both ends
pub fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce arbitrary model output to a single keyword token.
///
/// Leading and trailing runs of characters that are neither letters nor
/// digits are stripped, and only the first whitespace-delimited segment is
/// kept. The segment is stripped again so a token never ends in punctuation
/// ("hello, world" gives "hello").
pub fn sanitize_word(w: &str) -> String {
    let collapsed = collapse(w);
    let stripped = strip_non_word_edges(&collapsed);
    stripped
        .split_whitespace()
        .next()
        .map(strip_non_word_edges)
        .unwrap_or_default()
        .to_string()
}

fn strip_non_word_edges(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Take the first `max_chars` characters of `s`.
///
/// Counts chars, not bytes, so multi-byte text is never split inside a
/// code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
