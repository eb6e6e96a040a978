use serde_json::Value;

/// Decode JSON that a generator may have wrapped in prose.
///
/// The whole text is tried first. Failing that, the first brace-balanced
/// `{...}` span (string and escape aware) is tried, then the span from the
/// first `{` to the last `}`.
pub fn recover_json(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(text.trim()) {
        return Some(value);
    }

    let start = text.find('{')?;
    if let Some(end) = balanced_end(text, start) {
        if let Ok(value) = serde_json::from_str(&text[start..=end]) {
            return Some(value);
        }
    }

    let last = text.rfind('}')?;
    if last <= start {
        return None;
    }
    serde_json::from_str(&text[start..=last]).ok()
}

/// Byte index of the `}` closing the object opened at `start`
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + idx);
                }
            }
            _ => {}
        }
    }
    None
}
