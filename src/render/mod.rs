//! Markdown to HTML rendering.
//!
//! The renderer rewrites its input through an explicit ordered list of
//! named passes. Fenced code blocks are recognized
//! before anything else and stashed behind placeholders for the duration
//! of the pipeline, so their interiors stay verbatim: a `# heading` or
//! `*star*` inside a code block is never rewritten.

mod escape;
mod passes;

pub use escape::{escape_html, highlight_code};

use crate::RenderOptions;
use regex::Regex;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

/// Frames stash indices while the pass pipeline runs. U+FFFC (object
/// replacement character) occurs in no construct pattern, so no pass can
/// touch a stashed region. Literal U+FFFC characters in the input are
/// themselves stashed, so every U+FFFC in the working text belongs to
/// exactly one placeholder and placeholder-shaped user text cannot
/// collide with a stashed block.
const STASH_MARK: char = '\u{FFFC}';

/// Converts Markdown source text into an HTML fragment.
///
/// The output is safe to insert as inner markup of a container element
/// by the caller; link URLs and code block contents are emitted as-is
/// (see [`RenderOptions::escape_code_blocks`] and the crate-level notes
/// on the escaping boundary).
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a renderer with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    /// Renders Markdown source to HTML. Empty input yields an empty
    /// string. Identical input always produces identical output; the
    /// renderer holds no state across calls.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // Stash fenced code blocks first so no later pass can mistake
        // their contents for headings, emphasis, or list markers.
        let (mut working, blocks) = self.stash_fenced_blocks(text);

        for pass in passes::PASSES {
            working = (pass.apply)(&working);
        }

        restore_stashed(&working, &blocks)
    }

    /// Replaces each fenced code region with a `STASH_MARK`-framed stash
    /// index and each literal U+FFFC character in between with a stash
    /// entry of its own, so the working text contains U+FFFC only inside
    /// placeholders the renderer created.
    fn stash_fenced_blocks(&self, text: &str) -> (String, Vec<String>) {
        let mut blocks = Vec::new();
        let mut working = String::with_capacity(text.len());
        let mut last = 0;

        for found in FENCED_CODE.find_iter(text) {
            push_literal(&mut working, &mut blocks, &text[last..found.start()]);

            // The delimiters are three one-byte backticks on each side.
            let fence = found.as_str();
            let body = &fence[3..fence.len() - 3];
            let body = if self.options.escape_code_blocks {
                escape_html(body)
            } else {
                body.to_string()
            };
            blocks.push(format!("<pre><code>{body}</code></pre>"));
            push_marker(&mut working, blocks.len() - 1);

            last = found.end();
        }
        push_literal(&mut working, &mut blocks, &text[last..]);

        (working, blocks)
    }
}

fn push_marker(working: &mut String, index: usize) {
    working.push(STASH_MARK);
    working.push_str(&index.to_string());
    working.push(STASH_MARK);
}

fn push_literal(working: &mut String, blocks: &mut Vec<String>, segment: &str) {
    let mut rest = segment;
    while let Some(pos) = rest.find(STASH_MARK) {
        working.push_str(&rest[..pos]);
        blocks.push(STASH_MARK.to_string());
        push_marker(working, blocks.len() - 1);
        rest = &rest[pos + STASH_MARK.len_utf8()..];
    }
    working.push_str(rest);
}

/// Reassembles the rendered text from the exact placeholder spans
/// produced during stashing. Splitting on `STASH_MARK` alternates
/// between literal text and stash indices, since stashing left no other
/// U+FFFC in the working text and no pass emits one.
fn restore_stashed(text: &str, blocks: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, segment) in text.split(STASH_MARK).enumerate() {
        if i % 2 == 0 {
            out.push_str(segment);
        } else if let Some(block) = segment.parse::<usize>().ok().and_then(|idx| blocks.get(idx)) {
            out.push_str(block);
        } else {
            out.push_str(segment);
        }
    }
    out
}

/// Renders Markdown source to HTML with default options.
pub fn render_markdown(text: &str) -> String {
    MarkdownRenderer::with_defaults().render(text)
}

/// Names of the pipeline passes in application order, for diagnostics
/// and documentation.
pub fn pass_names() -> impl Iterator<Item = &'static str> {
    passes::PASSES.iter().map(|pass| pass.name)
}
