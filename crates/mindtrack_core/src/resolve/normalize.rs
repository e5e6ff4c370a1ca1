//! Label normalization helpers.

/// Lower-cases, trims and collapses inner whitespace runs to one space.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts space-separated words to Title Case.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn title_case_word(word: &str) -> String {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_label, title_case};

    #[test]
    fn normalize_trims_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_label("  Very \t ANXIOUS \n"), "very anxious");
        assert_eq!(normalize_label("   "), "");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("mind reading"), "Mind Reading");
        assert_eq!(title_case("ALL or nothing"), "All Or Nothing");
    }
}
