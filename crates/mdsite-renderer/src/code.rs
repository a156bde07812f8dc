//! Fenced and inline code.
//!
//! Fenced blocks are rendered and escaped up front, then replaced by opaque
//! placeholders until the end of the pipeline. A placeholder starts with `<`
//! so the paragraph stage treats it like any other block element, and it
//! contains neither backticks, `#`, nor `|`, so no other stage matches it.
//!
//! Every `U+E000` already present in the input is followed by `U+E002` while
//! blocks are set aside, so text typed in the document can never be mistaken
//! for a placeholder.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

/// Opening fence through the next fence, or through end of input when the
/// block is never closed.
static FENCED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)(?:```|\z)").unwrap());

/// Single-backtick span on one line.
static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<\u{E000}([0-9]+)\u{E001}>").unwrap());

const PLACEHOLDER_OPEN: &str = "\u{E000}";
const ESCAPED_OPEN: &str = "\u{E000}\u{E002}";

/// Rendered fenced code blocks set aside by [`extract_code_blocks`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlocks {
    blocks: Vec<String>,
}

impl CodeBlocks {
    #[cfg(test)]
    fn len(&self) -> usize {
        self.blocks.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[cfg(test)]
    fn get(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(String::as_str)
    }

    /// Put every block back in place of its placeholder and undo the input
    /// escaping applied by [`extract_code_blocks`].
    ///
    /// Placeholder-shaped text with an unknown index is left untouched.
    #[must_use]
    pub fn restore(&self, text: &str) -> String {
        let restored = if self.blocks.is_empty() {
            Cow::Borrowed(text)
        } else {
            PLACEHOLDER_RE.replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.blocks.get(index))
                    .map_or_else(|| caps[0].to_owned(), Clone::clone)
            })
        };
        if restored.contains(ESCAPED_OPEN) {
            restored.replace(ESCAPED_OPEN, PLACEHOLDER_OPEN)
        } else {
            restored.into_owned()
        }
    }

    fn push(&mut self, html: String) -> String {
        let placeholder = format!("<\u{E000}{}\u{E001}>", self.blocks.len());
        self.blocks.push(html);
        placeholder
    }
}

/// Render fenced code blocks and replace each with a placeholder.
///
/// Each block becomes `<pre><code>…</code></pre>` around its HTML-escaped
/// content. Returns the text with placeholders and the rendered blocks; call
/// [`CodeBlocks::restore`] once the remaining stages have run.
pub fn extract_code_blocks(text: &str) -> (String, CodeBlocks) {
    let text = if text.contains(PLACEHOLDER_OPEN) {
        Cow::Owned(text.replace(PLACEHOLDER_OPEN, ESCAPED_OPEN))
    } else {
        Cow::Borrowed(text)
    };

    let mut blocks = CodeBlocks::default();
    let replaced = FENCED_RE
        .replace_all(&text, |caps: &Captures| {
            blocks.push(format!("<pre><code>{}</code></pre>", escape_html(&caps[1])))
        })
        .into_owned();
    (replaced, blocks)
}

/// Wrap single-backtick spans in `<code>`.
///
/// Content is kept verbatim: unlike fenced blocks, inline code is not
/// HTML-escaped.
pub fn inline_code(text: &str) -> String {
    INLINE_RE.replace_all(text, "<code>${1}</code>").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render_blocks(text: &str) -> String {
        let (replaced, blocks) = extract_code_blocks(text);
        blocks.restore(&replaced)
    }

    #[test]
    fn test_fenced_block_escaped() {
        assert_eq!(
            render_blocks("```a<b>```"),
            "<pre><code>a&lt;b&gt;</code></pre>"
        );
    }

    #[test]
    fn test_fenced_block_multiline() {
        assert_eq!(
            render_blocks("before\n```\nfn main() {}\n```\nafter"),
            "before\n<pre><code>\nfn main() {}\n</code></pre>\nafter"
        );
    }

    #[test]
    fn test_multiple_fenced_blocks_independent() {
        let (replaced, blocks) = extract_code_blocks("```one```\ntext\n```two & three```");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks.get(0), Some("<pre><code>one</code></pre>"));
        assert_eq!(blocks.get(1), Some("<pre><code>two &amp; three</code></pre>"));
        assert!(replaced.contains("\ntext\n"));
        assert!(!replaced.contains("```"));
    }

    #[test]
    fn test_info_string_kept_as_content() {
        assert_eq!(
            render_blocks("```rust\nlet x = 1;\n```"),
            "<pre><code>rust\nlet x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_consumes_rest() {
        assert_eq!(
            render_blocks("intro\n```\n# not a heading\n<tag>"),
            "intro\n<pre><code>\n# not a heading\n&lt;tag&gt;</code></pre>"
        );
    }

    #[test]
    fn test_placeholder_hides_content() {
        let (replaced, blocks) = extract_code_blocks("```# `x` | y```");

        assert_eq!(blocks.len(), 1);
        assert!(replaced.starts_with('<'));
        assert!(!replaced.contains('`'));
        assert!(!replaced.contains('#'));
        assert!(!replaced.contains('|'));
    }

    #[test]
    fn test_no_blocks() {
        let (replaced, blocks) = extract_code_blocks("plain `inline`");

        assert!(blocks.is_empty());
        assert_eq!(replaced, "plain `inline`");
        assert_eq!(blocks.restore(&replaced), "plain `inline`");
    }

    #[test]
    fn test_restore_ignores_unknown_index() {
        let (replaced, blocks) = extract_code_blocks("```x```");
        let text = format!("{replaced} <\u{E000}7\u{E001}>");

        assert_eq!(
            blocks.restore(&text),
            "<pre><code>x</code></pre> <\u{E000}7\u{E001}>"
        );
    }

    #[test]
    fn test_literal_placeholder_text_survives() {
        let literal = "<\u{E000}0\u{E001}>";
        let (replaced, blocks) = extract_code_blocks(&format!("{literal}\n```x```"));

        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks.restore(&replaced),
            format!("{literal}\n<pre><code>x</code></pre>")
        );
    }

    #[test]
    fn test_literal_placeholder_text_without_blocks() {
        let text = "keep <\u{E000}3\u{E001}> and \u{E000}\u{E002} as typed";
        let (replaced, blocks) = extract_code_blocks(text);

        assert!(blocks.is_empty());
        assert_eq!(blocks.restore(&replaced), text);
    }

    #[test]
    fn test_placeholder_text_inside_fence_escaped_once() {
        assert_eq!(
            render_blocks("```<\u{E000}0\u{E001}>```"),
            "<pre><code>&lt;\u{E000}0\u{E001}&gt;</code></pre>"
        );
    }

    #[test]
    fn test_inline_code_verbatim() {
        assert_eq!(inline_code("`a<b>`"), "<code>a<b></code>");
    }

    #[test]
    fn test_inline_code_multiple_spans() {
        assert_eq!(
            inline_code("use `foo` and `bar`"),
            "use <code>foo</code> and <code>bar</code>"
        );
    }

    #[test]
    fn test_inline_code_does_not_cross_lines() {
        assert_eq!(inline_code("open `here\nclose` there"), "open `here\nclose` there");
    }

    #[test]
    fn test_inline_code_empty_span() {
        assert_eq!(inline_code("``"), "<code></code>");
    }

    #[test]
    fn test_inline_code_unmatched_backtick() {
        assert_eq!(inline_code("a ` b"), "a ` b");
    }
}
