//! Title generation against an external inference server
//!
//! The server sits behind [`TitleGenerator`]; everything after the raw
//! response text is the pure pipeline `recover_json` → `parse_parts` →
//! `format_daily_title`.

mod ollama;
mod prompt;

pub use ollama::{extract_generate_response, extract_model_names, OllamaClient, OllamaConfig};
pub use prompt::{build_prompt, response_schema};

use std::time::Instant;

use tracing::{debug, warn};

use crate::error::{NotecalError, Result};
use crate::note::prepare;
use crate::title::{format_daily_title, parse_parts, recover_json};
use crate::trace_time;

/// Source of raw model output for a prompt
pub trait TitleGenerator {
    /// Return the model's raw response text for `prompt`
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Turn raw model output into a daily label, or `None` when the output does
/// not hold a valid `{keywords, description}` object
pub fn label_from_response(date_str: &str, raw: &str) -> Option<String> {
    let value = recover_json(raw)?;
    let parts = parse_parts(&value)?;
    Some(format_daily_title(date_str, &parts))
}

/// Generate the AI label for one daily note.
///
/// Never yields a partial label: unusable output is
/// [`NotecalError::InvalidResponse`] and the caller keeps its previous label.
pub fn generate_daily_title<G>(
    generator: &G,
    date_str: &str,
    note_text: &str,
    max_chars: Option<usize>,
) -> Result<String>
where
    G: TitleGenerator + ?Sized,
{
    let start = Instant::now();
    let prepared = prepare(note_text, max_chars);
    if prepared.is_empty() {
        return Err(NotecalError::InvalidValue {
            context: "daily note".to_string(),
            value: format!("{date_str} has no text to title"),
        });
    }

    let prompt = build_prompt(date_str, &prepared);
    debug!(date = date_str, chars = prepared.chars().count(), "requesting title");

    let raw = generator.generate(&prompt)?;
    trace_time!(start, "generate_title", date = date_str);

    label_from_response(date_str, &raw).ok_or_else(|| {
        warn!(date = date_str, "model response did not contain valid title parts");
        NotecalError::InvalidResponse(format!(
            "expected {{\"keywords\": [3 words], \"description\": \"...\"}} for {date_str}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replays a canned response and remembers the prompt it was given
    struct CannedGenerator {
        response: Result<String>,
        seen_prompt: RefCell<Option<String>>,
    }

    impl CannedGenerator {
        fn replying(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                seen_prompt: RefCell::new(None),
            }
        }
    }

    impl TitleGenerator for CannedGenerator {
        fn generate(&self, prompt: &str) -> Result<String> {
            *self.seen_prompt.borrow_mut() = Some(prompt.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(NotecalError::Generator(e.to_string())),
            }
        }
    }

    #[test]
    fn test_label_from_response_with_prose() {
        let raw = r#"Here you go: {"keywords":["work","deep","planning"],"description":"Focused on the roadmap."}"#;
        assert_eq!(
            label_from_response("2025-12-15", raw).as_deref(),
            Some("2025-12-15 - work deep planning - Focused on the roadmap.")
        );
    }

    #[test]
    fn test_label_from_response_invalid() {
        assert_eq!(label_from_response("2025-12-15", "no idea"), None);
        assert_eq!(
            label_from_response("2025-12-15", r#"{"keywords":["a"],"description":"x"}"#),
            None
        );
    }

    #[test]
    fn test_generate_daily_title_prepares_note() {
        let generator = CannedGenerator::replying(
            r#"{"keywords":["release","bugs","team"],"description":"Shipped it!!"}"#,
        );
        let note = "---\ntags: [daily]\n---\n# Monday\n\nShipped   the release.";

        let label = generate_daily_title(&generator, "2025-12-15", note, Some(4000)).unwrap();
        assert_eq!(label, "2025-12-15 - release bugs team - Shipped it.");

        let prompt = generator.seen_prompt.borrow().clone().unwrap();
        assert!(prompt.contains("# Monday Shipped the release."));
        assert!(!prompt.contains("tags: [daily]"));
    }

    #[test]
    fn test_generate_daily_title_rejects_bad_output() {
        let generator = CannedGenerator::replying("I could not find a title.");
        let err = generate_daily_title(&generator, "2025-12-15", "text", None).unwrap_err();
        assert!(matches!(err, NotecalError::InvalidResponse(_)));
    }

    #[test]
    fn test_generate_daily_title_propagates_transport_errors() {
        let generator = CannedGenerator {
            response: Err(NotecalError::Other("connection refused".into())),
            seen_prompt: RefCell::new(None),
        };
        let err = generate_daily_title(&generator, "2025-12-15", "text", None).unwrap_err();
        assert!(matches!(err, NotecalError::Generator(_)));
    }

    #[test]
    fn test_generate_daily_title_empty_note() {
        let generator = CannedGenerator::replying("{}");
        let err = generate_daily_title(&generator, "2025-12-15", "---\na: b\n---\n  ", None)
            .unwrap_err();
        assert!(matches!(err, NotecalError::InvalidValue { .. }));
        assert!(generator.seen_prompt.borrow().is_none());
    }
}
