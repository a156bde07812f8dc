//! HTML page shell and sidebar.
//!
//! All names, titles and hrefs coming from the document tree or
//! configuration are HTML-escaped. Slugs in hrefs are percent-encoded per
//! path segment first. The rendered fragment is inserted as-is.

use std::fmt::Write;

use mdsite_nav::NavNode;
use mdsite_renderer::escape_html;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::util::relative_path;

/// Characters that cannot appear literally in a path segment or query value.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// How sidebar links address documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStyle<'a> {
    /// Query-string links (`?page=Guides/install`) for a dynamic server.
    #[default]
    Query,
    /// Relative links to `.html` files for a static build.
    Static {
        /// Slug of the file the links are written into (`""` for the output root).
        base: &'a str,
    },
}

impl LinkStyle<'_> {
    /// Link to the document `slug`.
    #[must_use]
    pub fn href(self, slug: &str) -> String {
        match self {
            Self::Query => format!("?page={}", encode_path(slug)),
            Self::Static { base } => format!("{}.html", encode_path(&relative_path(base, slug))),
        }
    }
}

/// Percent-encode each `/`-separated segment of `path`.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Display label for a category: underscores become spaces.
#[must_use]
pub fn category_label(name: &str) -> String {
    name.replace('_', " ")
}

/// Fallback fragment shown when the requested page does not exist.
#[must_use]
pub fn welcome_fragment(title: &str, text: &str) -> String {
    format!(
        "<h1>{}</h1><p>{}</p>",
        escape_html(title),
        escape_html(text)
    )
}

/// Render the sidebar for a navigation tree.
///
/// Categories produce a `category` label item followed by their children;
/// nested categories are marked `subcategory`. The document whose slug equals
/// `current` carries `class="active"`.
#[must_use]
pub fn render_sidebar(
    nav: &[NavNode],
    title: &str,
    current: &str,
    links: LinkStyle<'_>,
) -> String {
    let mut html = String::from(r#"<div class="sidebar">"#);
    write!(html, r#"<div class="brand">{}</div><ul>"#, escape_html(title)).unwrap();
    for node in nav {
        render_node(node, 0, current, links, &mut html);
    }
    html.push_str("</ul></div>");
    html
}

fn render_node(
    node: &NavNode,
    depth: usize,
    current: &str,
    links: LinkStyle<'_>,
    out: &mut String,
) {
    match node {
        NavNode::Category { name, children } => {
            let class = if depth == 0 {
                "category"
            } else {
                "category subcategory"
            };
            write!(
                out,
                r#"<li class="{class}">{}</li>"#,
                escape_html(&category_label(name))
            )
            .unwrap();
            for child in children {
                render_node(child, depth + 1, current, links, out);
            }
        }
        NavNode::Document { display_name, slug } => {
            let active = if slug == current {
                r#" class="active""#
            } else {
                ""
            };
            write!(
                out,
                r#"<li><a href="{}"{active}>{}</a></li>"#,
                escape_html(&links.href(slug)),
                escape_html(display_name)
            )
            .unwrap();
        }
    }
}

/// Wrap a sidebar and a content fragment in a complete HTML document.
#[must_use]
pub fn render_shell(title: &str, stylesheet: &str, sidebar: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
{sidebar}
<div class="main">
{content}
</div>
</body>
</html>
"#,
        title = escape_html(title),
        stylesheet = escape_html(stylesheet),
    )
}
