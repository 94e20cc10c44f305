//! HTML escaping and code block composition.

/// Escapes the five HTML-significant characters so the result can be
/// embedded inside HTML text content without being interpreted as
/// markup. A standards-compliant parser decodes the output back to the
/// input exactly.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Composes a highlighted code block fragment.
///
/// The code is always HTML-escaped. The language identifier lands in an
/// attribute value and is escaped with the same table, so an
/// attacker-influenced identifier cannot break out of the attribute;
/// ordinary identifiers (`"js"`, `"rust"`) pass through unchanged.
pub fn highlight_code(code: &str, language: &str) -> String {
    format!(
        "<pre class=\"code-block language-{}\"><code>{}</code></pre>",
        escape_html(language),
        escape_html(code)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("a\"b<c>d&e'"),
            "a&quot;b&lt;c&gt;d&amp;e&#39;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_escape_ampersand_first_is_not_double_escaped() {
        // Single scan per character, so already-escaped input gains
        // exactly one more level.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_highlight_code() {
        assert_eq!(
            highlight_code("1<2", "js"),
            "<pre class=\"code-block language-js\"><code>1&lt;2</code></pre>"
        );
    }

    #[test]
    fn test_highlight_code_escapes_language() {
        let out = highlight_code("x", "js\"><script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("language-js&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_highlight_code_empty_language() {
        assert_eq!(
            highlight_code("x", ""),
            "<pre class=\"code-block language-\"><code>x</code></pre>"
        );
    }
}
