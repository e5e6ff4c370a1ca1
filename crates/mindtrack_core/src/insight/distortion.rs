//! Cognitive-distortion label formatting.

use crate::resolve::normalize::title_case_word;
use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel-case regex"));

/// Formats a raw distortion id as Title Case words.
///
/// Hyphens, underscores, whitespace and camelCase boundaries all split words:
/// `all-or-nothing` and `allOrNothing` both become `All Or Nothing`.
pub fn format_distortion_label(raw: &str) -> String {
    let spaced = CAMEL_BOUNDARY_RE.replace_all(raw.trim(), "$1 $2");
    spaced
        .split(|ch: char| ch == '-' || ch == '_' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::format_distortion_label;

    #[test]
    fn formats_hyphen_snake_and_camel_case() {
        assert_eq!(format_distortion_label("all-or-nothing"), "All Or Nothing");
        assert_eq!(format_distortion_label("allOrNothing"), "All Or Nothing");
        assert_eq!(format_distortion_label("mind_reading"), "Mind Reading");
        assert_eq!(format_distortion_label("  catastrophizing "), "Catastrophizing");
        assert_eq!(format_distortion_label("SHOULD_STATEMENTS"), "Should Statements");
    }

    #[test]
    fn blank_input_formats_to_empty() {
        assert_eq!(format_distortion_label(" - _ "), "");
    }
}
