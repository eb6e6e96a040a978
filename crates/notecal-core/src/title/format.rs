use super::DailyTitleParts;
use crate::text::collapse;

/// Separator between the date, keywords and description of a label
pub const LABEL_SEPARATOR: &str = " - ";

/// Compose `"<date> - <kw1> <kw2> <kw3> - <description>"`
pub fn format_daily_title(date_str: &str, parts: &DailyTitleParts) -> String {
    format!(
        "{date_str}{LABEL_SEPARATOR}{}{LABEL_SEPARATOR}{}",
        parts.keywords.join(" "),
        parts.description
    )
}

/// Compose a list label from a user-chosen suffix, or the bare date when the
/// suffix is blank
pub fn format_custom_list_title(date_str: &str, suffix: &str) -> String {
    let suffix = collapse(suffix);
    if suffix.is_empty() {
        date_str.to_string()
    } else {
        format!("{date_str}{LABEL_SEPARATOR}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_daily_title() {
        let parts = DailyTitleParts {
            keywords: ["work".into(), "deep".into(), "planning".into()],
            description: "Focused on the roadmap.".into(),
        };
        assert_eq!(
            format_daily_title("2025-12-15", &parts),
            "2025-12-15 - work deep planning - Focused on the roadmap."
        );
    }

    #[test]
    fn test_format_custom_list_title() {
        assert_eq!(
            format_custom_list_title("2025-12-15", "  reflection\n ideas "),
            "2025-12-15 - reflection ideas"
        );
    }

    #[test]
    fn test_format_custom_list_title_blank_suffix() {
        assert_eq!(format_custom_list_title("2025-12-15", " \t"), "2025-12-15");
    }
}
