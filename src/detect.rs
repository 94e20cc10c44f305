//! Markdown detection heuristic.

use regex::Regex;
use std::sync::LazyLock;

/// One single-match probe per construct. First hit wins, so order only
/// affects which pattern short-circuits, not the answer.
static DETECTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?m)^#+\s+",    // heading
        r"\*\*.*\*\*",    // strong
        r"\*[^*].*[^*]\*", // emphasis
        r"\[.*\]\(.*\)",  // link
        r"(?m)^[-*]\s+",  // unordered list item
        r"(?m)^\d+\.\s+", // ordered list item
        r"(?m)^>\s+",     // blockquote
        r"`[^`]+`",       // inline code
        r"~~.*~~",        // strikethrough
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Reports whether `text` contains any recognized Markdown construct.
///
/// This is a heuristic classifier, not a validator: a `true` result
/// means at least one marker pattern is present, not that rendering
/// would change the text. Empty input yields `false`.
pub fn has_markdown(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    DETECTION.iter().any(|pattern| pattern.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_false() {
        assert!(!has_markdown(""));
    }

    #[test]
    fn test_plain_text_is_false() {
        assert!(!has_markdown("just a sentence, nothing else."));
        assert!(!has_markdown("math like 2 * 3 = 6 is fine"));
    }

    #[test]
    fn test_each_construct_is_detected() {
        assert!(has_markdown("# heading"));
        assert!(has_markdown("some **bold** words"));
        assert!(has_markdown("*emphasized span*"));
        assert!(has_markdown("[label](http://e.com)"));
        assert!(has_markdown("- item"));
        assert!(has_markdown("* item"));
        assert!(has_markdown("12. item"));
        assert!(has_markdown("> quoted"));
        assert!(has_markdown("call `f()` here"));
        assert!(has_markdown("~~removed~~"));
    }

    #[test]
    fn test_block_markers_are_line_anchored() {
        assert!(!has_markdown("a - b"));
        assert!(!has_markdown("x > y"));
        assert!(has_markdown("a\n- b"));
    }
}
