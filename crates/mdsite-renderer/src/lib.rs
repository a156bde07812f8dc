//! Restricted-dialect markdown to HTML renderer.
//!
//! The dialect covers fenced code blocks, inline code, `#`/`##`/`###`
//! headings, pipe tables and line paragraphs. Anything else passes through as
//! literal text. Rendering never fails.
//!
//! # Pipeline
//!
//! [`render`] runs five stages in a fixed order, each over the output of the
//! previous one:
//!
//! 1. [`extract_code_blocks`]: fenced blocks are escaped and set aside
//! 2. [`inline_code`]: single-backtick spans
//! 3. [`headings`]: `# `, `## `, `### ` lines
//! 4. [`tables`]: runs of `|…|` lines
//! 5. [`paragraphs`]: remaining text lines
//!
//! Fenced blocks are restored last, so no later stage can rewrite their
//! content.
//!
//! # Example
//!
//! ```
//! let html = mdsite_renderer::render("# Hello\n\nSome `code` here.");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<p>Some <code>code</code> here.</p>"));
//! ```

mod code;
mod escape;
mod heading;
mod paragraph;
mod renderer;
mod table;

pub use code::{CodeBlocks, extract_code_blocks, inline_code};
pub use escape::escape_html;
pub use heading::headings;
pub use paragraph::paragraphs;
pub use renderer::render;
pub use table::tables;
