//! Navigation tree nodes.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum NavNode {
    /// A directory. The name is the raw directory name; display substitution
    /// (e.g. `_` to space) is left to the presentation layer.
    Category {
        /// Directory name.
        name: String,
        /// Child nodes in storage listing order.
        children: Vec<NavNode>,
    },
    /// A markdown file.
    Document {
        /// Filename without extension.
        display_name: String,
        /// Path relative to the document root, without extension, `/`-separated.
        slug: String,
    },
}

impl NavNode {
    /// Create a category node.
    #[must_use]
    pub fn category(name: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Category {
            name: name.into(),
            children,
        }
    }

    /// Create a document node.
    #[must_use]
    pub fn document(display_name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::Document {
            display_name: display_name.into(),
            slug: slug.into(),
        }
    }

    /// Slug of a document node, `None` for categories.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Document { slug, .. } => Some(slug),
            Self::Category { .. } => None,
        }
    }

    /// Collect every document slug below (and including) this node, depth-first.
    pub fn collect_slugs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Document { slug, .. } => out.push(slug),
            Self::Category { children, .. } => {
                for child in children {
                    child.collect_slugs(out);
                }
            }
        }
    }
}
