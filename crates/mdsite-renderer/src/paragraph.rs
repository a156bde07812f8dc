//! Line paragraphs.

/// Wrap every text line in its own `<p>`.
///
/// Blank lines and lines that already start with `<` pass through unchanged,
/// each followed by a newline. Consecutive prose lines are not merged: every
/// source line becomes a separate paragraph.
pub fn paragraphs(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + text.len() / 4);

    for line in text.split('\n') {
        if line.trim().is_empty() || line.starts_with('<') {
            html.push_str(line);
            html.push('\n');
        } else {
            html.push_str("<p>");
            html.push_str(line);
            html.push_str("</p>");
        }
    }

    html
}
