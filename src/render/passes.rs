//! Named transformation passes of the rendering pipeline.
//!
//! Each pass is a pure function that scans the entire working text and
//! applies its substitution globally. Pipeline order is a correctness
//! requirement, not an implementation detail: strong emphasis must run
//! before plain emphasis so `**x**` is not consumed by the
//! single-delimiter rule, and newline conversion must run last among the
//! block passes since every line-anchored pattern relies on `\n` as its
//! anchor.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// One global substitution step applied to the whole working text.
pub(crate) struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The ordered rendering pipeline, applied after fenced code blocks have
/// been stashed behind placeholders (see [`super::MarkdownRenderer`]).
///
/// A line matching more than one line-anchored pattern is resolved by
/// this order: whichever pass runs first wins. `> # text` therefore
/// renders as a blockquote containing literal `# text`, and a `***` rule
/// line is consumed by the emphasis pass before the rule pass sees it.
pub(crate) const PASSES: &[Pass] = &[
    Pass {
        name: "headings",
        apply: headings,
    },
    Pass {
        name: "strong",
        apply: strong,
    },
    Pass {
        name: "emphasis",
        apply: emphasis,
    },
    Pass {
        name: "strikethrough",
        apply: strikethrough,
    },
    Pass {
        name: "code-spans",
        apply: code_spans,
    },
    Pass {
        name: "links",
        apply: links,
    },
    Pass {
        name: "list-items",
        apply: list_items,
    },
    Pass {
        name: "merge-lists",
        apply: merge_lists,
    },
    Pass {
        name: "blockquotes",
        apply: blockquotes,
    },
    Pass {
        name: "rules",
        apply: horizontal_rules,
    },
    Pass {
        name: "line-breaks",
        apply: line_breaks,
    },
    Pass {
        name: "merge-lists-final",
        apply: merge_lists,
    },
    Pass {
        name: "collapse-item-breaks",
        apply: collapse_item_breaks,
    },
];

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,6}) (.*)$").unwrap());

/// `# text` through `###### text` at line start. Marker counts are
/// mutually exclusive per line, so a single counted pattern covers all
/// six levels.
fn headings(text: &str) -> String {
    HEADING
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}

static STRONG_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static STRONG_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

fn strong(text: &str) -> String {
    let text = STRONG_ASTERISK.replace_all(text, "<strong>$1</strong>");
    STRONG_UNDERSCORE
        .replace_all(&text, "<strong>$1</strong>")
        .into_owned()
}

static EMPHASIS_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static EMPHASIS_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

fn emphasis(text: &str) -> String {
    let text = EMPHASIS_ASTERISK.replace_all(text, "<em>$1</em>");
    EMPHASIS_UNDERSCORE
        .replace_all(&text, "<em>$1</em>")
        .into_owned()
}

static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.*?)~~").unwrap());

fn strikethrough(text: &str) -> String {
    STRIKETHROUGH
        .replace_all(text, "<del>$1</del>")
        .into_owned()
}

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Single-backtick spans. Triple-backtick regions were stashed before
/// the pipeline ran, so this cannot reach fenced code.
fn code_spans(text: &str) -> String {
    CODE_SPAN.replace_all(text, "<code>$1</code>").into_owned()
}

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\[]+)\]\(([^)]+)\)").unwrap());

fn links(text: &str) -> String {
    LINK.replace_all(
        text,
        "<a href=\"$2\" target=\"_blank\" rel=\"noopener noreferrer\">$1</a>",
    )
    .into_owned()
}

static UNORDERED_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\*\s(.*)$").unwrap());
static UNORDERED_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*-\s(.*)$").unwrap());
static ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\d\.\s(.*)$").unwrap());

/// Each matching line is individually wrapped in a full list envelope;
/// the merge pass then deletes boundaries between adjacent envelopes of
/// the same kind.
fn list_items(text: &str) -> String {
    let text = UNORDERED_STAR.replace_all(text, "<ul><li>$1</li></ul>");
    let text = UNORDERED_DASH.replace_all(&text, "<ul><li>$1</li></ul>");
    ORDERED
        .replace_all(&text, "<ol><li>$1</li></ol>")
        .into_owned()
}

static ADJACENT_UL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</ul>\s*<ul>").unwrap());
static ADJACENT_OL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</ol>\s*<ol>").unwrap());

/// Merges adjacent same-kind list envelopes into one list element,
/// consuming the intervening newline along with the boundary tags. Runs
/// once before newline conversion and once after as a final cleanup.
fn merge_lists(text: &str) -> String {
    let text = ADJACENT_UL.replace_all(text, "");
    ADJACENT_OL.replace_all(&text, "").into_owned()
}

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s(.*)$").unwrap());

fn blockquotes(text: &str) -> String {
    BLOCKQUOTE
        .replace_all(text, "<blockquote>$1</blockquote>")
        .into_owned()
}

static RULE_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---$").unwrap());
static RULE_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\*\*\*$").unwrap());

fn horizontal_rules(text: &str) -> String {
    let text = RULE_DASH.replace_all(text, "<hr>");
    RULE_STAR.replace_all(&text, "<hr>").into_owned()
}

fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

static ITEM_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</li>\s*<br>\s*<li>").unwrap());

/// Removes a spurious break left between merged list items.
fn collapse_item_breaks(text: &str) -> String {
    ITEM_BREAK.replace_all(text, "</li><li>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(headings("# one"), "<h1>one</h1>");
        assert_eq!(headings("### three"), "<h3>three</h3>");
        assert_eq!(headings("###### six"), "<h6>six</h6>");
    }

    #[test]
    fn test_heading_requires_space_and_line_start() {
        assert_eq!(headings("####### seven"), "####### seven");
        assert_eq!(headings("#nospace"), "#nospace");
        assert_eq!(headings("text # inline"), "text # inline");
    }

    #[test]
    fn test_strong_both_delimiters() {
        assert_eq!(strong("**a**"), "<strong>a</strong>");
        assert_eq!(strong("__a__"), "<strong>a</strong>");
    }

    #[test]
    fn test_emphasis_non_greedy() {
        assert_eq!(emphasis("*a* and *b*"), "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(strikethrough("~~gone~~"), "<del>gone</del>");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(code_spans("use `x` here"), "use <code>x</code> here");
    }

    #[test]
    fn test_link_attributes() {
        assert_eq!(
            links("[x](http://e.com)"),
            "<a href=\"http://e.com\" target=\"_blank\" rel=\"noopener noreferrer\">x</a>"
        );
    }

    #[test]
    fn test_list_items_wrap_per_line() {
        assert_eq!(
            list_items("- a\n- b"),
            "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
        );
        assert_eq!(list_items("1. a"), "<ol><li>a</li></ol>");
    }

    #[test]
    fn test_merge_lists_consumes_newline() {
        assert_eq!(
            merge_lists("<ul><li>a</li></ul>\n<ul><li>b</li></ul>"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(blockquotes("> quoted"), "<blockquote>quoted</blockquote>");
    }

    #[test]
    fn test_rule_requires_whole_line() {
        assert_eq!(horizontal_rules("---"), "<hr>");
        assert_eq!(horizontal_rules("a --- b"), "a --- b");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(line_breaks("a\nb"), "a<br>b");
    }

    #[test]
    fn test_collapse_item_breaks() {
        assert_eq!(
            collapse_item_breaks("</li><br><li>"),
            "</li><li>"
        );
    }
}
