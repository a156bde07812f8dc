//! The ordered render pipeline.

use crate::code::{extract_code_blocks, inline_code};
use crate::heading::headings;
use crate::paragraph::paragraphs;
use crate::table::tables;

/// Render restricted-dialect markdown to an HTML fragment.
///
/// Pure function of its input: the same text always yields the same
/// fragment. The output is HTML, so `render(render(x))` is generally not
/// `render(x)`.
///
/// # Examples
///
/// ```
/// use mdsite_renderer::render;
///
/// assert_eq!(render("# Title"), "<h1>Title</h1>\n");
/// assert_eq!(render("line one\nline two"), "<p>line one</p><p>line two</p>");
/// ```
pub fn render(markdown: &str) -> String {
    let (text, code_blocks) = extract_code_blocks(markdown);
    let text = inline_code(&text);
    let text = headings(&text);
    let text = tables(&text);
    let text = paragraphs(&text);
    code_blocks.restore(&text)
}
