//! # notemark
//!
//! Lightweight Markdown engine for freeform note text.
//!
//! Converts a restricted Markdown subset to HTML, detects whether text
//! contains Markdown syntax, strips Markdown markers back to plain text,
//! and composes HTML-escaped code blocks. All operations are pure
//! functions over text: no state, no I/O, safe to call from any thread.
//!
//! ## Example
//!
//! ```
//! use notemark::{render_markdown, has_markdown, strip_markdown};
//!
//! let html = render_markdown("# Title\n**bold** text");
//! assert_eq!(html, "<h1>Title</h1><br><strong>bold</strong> text");
//!
//! assert!(has_markdown("- item"));
//! assert_eq!(strip_markdown("[label](http://e.com)"), "label");
//! ```
//!
//! ## Escaping boundary
//!
//! The fenced-code pass of [`render_markdown`] wraps code block contents
//! verbatim, without HTML escaping. A caller rendering untrusted input
//! must either escape code block contents itself (see [`escape_html`])
//! or enable [`RenderOptions::escape_code_blocks`] to move that boundary
//! inside the renderer. [`highlight_code`] always escapes its code
//! argument.

pub mod detect;
pub mod error;
pub mod render;
pub mod strip;

pub use detect::has_markdown;
pub use error::{Error, Result};
pub use render::{escape_html, highlight_code, render_markdown, MarkdownRenderer};
pub use strip::strip_markdown;

/// Options for Markdown to HTML rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Whether to HTML-escape the contents of fenced code blocks.
    ///
    /// When `false` (the default) code block interiors are emitted
    /// verbatim and escaping is the caller's responsibility.
    pub escape_code_blocks: bool,
}
