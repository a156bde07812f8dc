//! ATX-style headings, levels 1 to 3.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// One to three hashes, exactly one space, rest of the line.
///
/// `####` never matches: after three hashes the next character must be a
/// space, and shorter prefixes are followed by another `#`.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3}) (.*)$").unwrap());

/// Turn `# `, `## ` and `### ` lines into `<h1>`, `<h2>` and `<h3>`.
pub fn headings(text: &str) -> String {
    HEADING_RE
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}
