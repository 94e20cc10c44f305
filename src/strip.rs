//! Markdown syntax stripping.
//!
//! Removes structural markers while keeping the underlying text and its
//! line structure. Operates on raw Markdown source; it makes no
//! assumption that the input came from the renderer.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s*").unwrap());
// Paired delimiters are symmetric: the delimiter that opens must close.
// The engine has no backreferences, so symmetry is spelled out as one
// alternative per delimiter and the replacement keeps whichever group
// matched.
static STRONG_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").unwrap());
static EMPHASIS_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*|_(.*?)_").unwrap());
static STRIKETHROUGH_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static CODE_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());
static LINK_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static LIST_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").unwrap());
static ORDERED_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());
static QUOTE_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s+").unwrap());

/// Removes Markdown markers from `text`, yielding plain text.
///
/// Link syntax keeps only the label; list, quote and heading markers are
/// dropped; paired inline delimiters are unwrapped. Newlines pass
/// through untouched. Empty input yields an empty string.
pub fn strip_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = HEADING_MARKS.replace_all(text, "");
    let text = STRONG_MARKS.replace_all(&text, "${1}${2}");
    let text = EMPHASIS_MARKS.replace_all(&text, "${1}${2}");
    let text = STRIKETHROUGH_MARKS.replace_all(&text, "$1");
    let text = CODE_MARKS.replace_all(&text, "$1");
    let text = LINK_MARKS.replace_all(&text, "$1");
    let text = LIST_MARKS.replace_all(&text, "");
    let text = ORDERED_MARKS.replace_all(&text, "");
    QUOTE_MARKS.replace_all(&text, "").into_owned()
}
