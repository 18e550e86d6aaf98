//! Command text normalization
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Whitespace collapsing and wake word stripping

/// Characters trimmed around a command after the wake word is removed
const WAKE_TRIM_CHARS: &[char] = &[',', '.', ':', '-', ' '];

/// Collapse whitespace runs to single spaces, trim, and lowercase
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove one leading occurrence of the wake word
///
/// The input is expected to be normalized already. Text that doesn't start with
/// the wake word is returned unchanged.
pub fn strip_wake_word(normalized: &str, wake_word: &str) -> String {
    let wake_word = wake_word.trim();
    if wake_word.is_empty() {
        return normalized.to_string();
    }

    match normalized.strip_prefix(wake_word) {
        Some(rest) => rest.trim_matches(WAKE_TRIM_CHARS).trim().to_string(),
        None => normalized.to_string(),
    }
}

/// Normalize raw input and strip the wake word in one step
pub fn prepare_command(raw: &str, wake_word: &str) -> String {
    strip_wake_word(&normalize(raw), &normalize(wake_word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  What   IS\tthe\n time "), "what is the time");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strip_wake_word_with_punctuation() {
        assert_eq!(strip_wake_word("jarvis, what time is it", "jarvis"), "what time is it");
        assert_eq!(strip_wake_word("jarvis: open github", "jarvis"), "open github");
        assert_eq!(strip_wake_word("jarvis - tell me a joke.", "jarvis"), "tell me a joke");
    }

    #[test]
    fn test_strip_wake_word_only_first_occurrence() {
        assert_eq!(strip_wake_word("jarvis say jarvis", "jarvis"), "say jarvis");
        assert_eq!(strip_wake_word("jarvis jarvis", "jarvis"), "jarvis");
    }

    #[test]
    fn test_strip_wake_word_without_prefix_is_unchanged() {
        assert_eq!(strip_wake_word("hello jarvis", "jarvis"), "hello jarvis");
        assert_eq!(strip_wake_word("weather in paris", "jarvis"), "weather in paris");
        assert_eq!(strip_wake_word("", "jarvis"), "");
    }

    #[test]
    fn test_strip_wake_word_alone_yields_empty() {
        assert_eq!(strip_wake_word("jarvis", "jarvis"), "");
        assert_eq!(strip_wake_word("jarvis...", "jarvis"), "");
    }

    #[test]
    fn test_prepare_command() {
        assert_eq!(prepare_command("  Jarvis,   WEATHER in  Paris ", "Jarvis"), "weather in paris");
        assert_eq!(prepare_command("Hello", "jarvis"), "hello");
    }
}
