use serde_json::{json, Value};

use crate::title::{KEYWORD_COUNT, MAX_DESCRIPTION_CHARS};

/// Instruction text asking the model for a `{keywords, description}` object
pub fn build_prompt(date_str: &str, note_text: &str) -> String {
    format!(
        "You write titles for daily journal notes.\n\
         Read the note dated {date_str} and answer with a single JSON object and nothing else:\n\
         {{\"keywords\": [\"word\", \"word\", \"word\"], \"description\": \"sentence\"}}\n\
         Rules:\n\
         - keywords: exactly {KEYWORD_COUNT} single words naming the day's main themes, no spaces, no punctuation\n\
         - description: one plain sentence of at most {MAX_DESCRIPTION_CHARS} characters summarizing the day\n\
         - write in the same language as the note\n\
         - do not wrap the JSON in markdown or add commentary\n\
         \n\
         Note:\n\
         {note_text}\n"
    )
}

/// JSON schema for the generator's structured-output `format` field
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "keywords": {
                "type": "array",
                "items": {"type": "string"},
                "minItems": KEYWORD_COUNT,
                "maxItems": KEYWORD_COUNT
            },
            "description": {
                "type": "string",
                "maxLength": MAX_DESCRIPTION_CHARS
            }
        },
        "required": ["keywords", "description"]
    })
}
