//! Pipe tables.
//!
//! A table is a maximal run of consecutive lines that each start and end
//! with `|`. There is no alignment support and no escaping of cell content.

use std::borrow::Cow;
use std::fmt::Write;

/// Rows containing this run are header/body separators and produce no output.
const SEPARATOR: &str = "---";

/// Replace every run of pipe-delimited lines with an HTML table.
///
/// The row at index 0 of the run is the header row (`<th>` cells); every
/// other row uses `<td>`. The index is taken before separator rows are
/// dropped, so a run that starts with a separator has no header row.
///
/// Each table is emitted on a single line of its own.
pub fn tables(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        if is_table_line(lines[i]) {
            let start = i;
            while i < lines.len() && is_table_line(lines[i]) {
                i += 1;
            }
            out.push(Cow::Owned(render_table(&lines[start..i])));
        } else {
            out.push(Cow::Borrowed(lines[i]));
            i += 1;
        }
    }

    out.join("\n")
}

fn trim_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_table_line(line: &str) -> bool {
    let line = trim_cr(line);
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

fn render_table(lines: &[&str]) -> String {
    let mut html = String::from(r#"<div class="table-responsive"><table>"#);

    for (index, line) in lines.iter().enumerate() {
        let row = trim_cr(line);
        if row.contains(SEPARATOR) {
            continue;
        }

        let tag = if index == 0 { "th" } else { "td" };
        html.push_str("<tr>");
        for cell in row.trim_matches('|').split('|').filter(|c| !c.is_empty()) {
            write!(html, "<{tag}>{}</{tag}>", cell.trim()).unwrap();
        }
        html.push_str("</tr>");
    }

    html.push_str("</table></div>");
    html
}
