// src/utils/text.rs

//! Title normalization.

use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first character of every word, leaving the rest untouched.
///
/// `"senior baker"` becomes `"Senior Baker"`; `"iOS dev"` becomes `"IOS Dev"`.
pub fn title_case(text: &str) -> String {
    text.split_word_bounds()
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphanumeric() => {
                    first.to_uppercase().chain(chars).collect::<String>()
                }
                _ => segment.to_string(),
            }
        })
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip the surrounding double quotes some exports leave around titles.
pub fn trim_quotes(text: &str) -> &str {
    text.trim_matches('"')
}
