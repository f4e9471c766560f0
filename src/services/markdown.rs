//! Markdown Formatting
//!
//! Converts the constrained Markdown subset produced by the analysis
//! pipeline (headings, bullet lists, bold/italic, pipe tables) into HTML
//! fragments for display.
//!
//! The passes run in a fixed order; later passes must not re-match the
//! output of earlier ones. Heading anchors are the raw heading text,
//! deliberately not slugified, and literal angle brackets in the source are
//! not escaped - both reproduce the reference behavior.

use std::sync::OnceLock;

use regex::Regex;

/// Format Markdown text as an HTML fragment.
///
/// Supported: pipe tables, `#`..`####` headings, `- ` bullet lists,
/// `**bold**`, `*italic*`, and blank-line paragraphs. Nested lists, ordered
/// lists, links, images and code blocks are out of scope.
pub fn format_markdown(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = format_tables(&text);
    let text = format_headings(&text);
    let text = format_bullet_lists(&text);
    let text = format_inline_emphasis(&text);
    wrap_paragraphs(&text)
}

/// Convert pipe-delimited Markdown tables into HTML tables.
///
/// A table is a header row, a separator row, and at least one data row.
/// Cell count per row is whatever the split yields; no column-count
/// validation or padding.
fn format_tables(text: &str) -> String {
    static TABLE_RE: OnceLock<Regex> = OnceLock::new();
    // The final row's newline is optional so a table can sit at the end of
    // a trimmed section.
    let re = TABLE_RE.get_or_init(|| {
        Regex::new(r"\|[^\n]+\|\n\|[-:| ]+\|\n(?:\|[^\n]+\|\n?)+").unwrap()
    });

    re.replace_all(text, |caps: &regex::Captures| {
        let table_text = caps[0].trim();
        let lines: Vec<&str> = table_text.lines().collect();

        let mut html = String::from("<table class=\"markdown-table\">\n");

        // Header row
        html.push_str("<thead>\n<tr>\n");
        for cell in split_row(lines[0]) {
            html.push_str(&format!("<th>{}</th>\n", cell));
        }
        html.push_str("</tr>\n</thead>\n");

        // Body rows; the separator row at index 1 is skipped
        html.push_str("<tbody>\n");
        for row in lines.iter().skip(2) {
            if row.trim().is_empty() {
                continue;
            }
            let cells = split_row(row);
            if cells.is_empty() {
                continue;
            }
            html.push_str("<tr>\n");
            for cell in cells {
                html.push_str(&format!("<td>{}</td>\n", cell));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>");

        html
    })
    .into_owned()
}

/// Split a table row into trimmed cells, dropping the outer pipes
fn split_row(row: &str) -> Vec<String> {
    let parts: Vec<&str> = row.split('|').collect();
    if parts.len() < 3 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Convert `#`..`####` headings into `<h1>`-`<h4>` with anchor ids equal to
/// the heading text verbatim.
fn format_headings(text: &str) -> String {
    static H1: OnceLock<Regex> = OnceLock::new();
    static H2: OnceLock<Regex> = OnceLock::new();
    static H3: OnceLock<Regex> = OnceLock::new();
    static H4: OnceLock<Regex> = OnceLock::new();

    let text = H1
        .get_or_init(|| Regex::new(r"(?m)^# (.+)$").unwrap())
        .replace_all(text, "<h1 id=\"$1\">$1</h1>");
    let text = H2
        .get_or_init(|| Regex::new(r"(?m)^## (.+)$").unwrap())
        .replace_all(&text, "<h2 id=\"$1\">$1</h2>");
    let text = H3
        .get_or_init(|| Regex::new(r"(?m)^### (.+)$").unwrap())
        .replace_all(&text, "<h3 id=\"$1\">$1</h3>");
    let text = H4
        .get_or_init(|| Regex::new(r"(?m)^#### (.+)$").unwrap())
        .replace_all(&text, "<h4 id=\"$1\">$1</h4>");

    text.into_owned()
}

/// Convert `- ` lines into list items and wrap maximal contiguous runs in a
/// single `<ul>`.
fn format_bullet_lists(text: &str) -> String {
    static ITEM_RE: OnceLock<Regex> = OnceLock::new();
    static RUN_RE: OnceLock<Regex> = OnceLock::new();

    let text = ITEM_RE
        .get_or_init(|| Regex::new(r"(?m)^- (.+)$").unwrap())
        .replace_all(text, "<li>$1</li>");

    RUN_RE
        .get_or_init(|| {
            Regex::new(r"(<li>[^\n]*</li>(?:\n<li>[^\n]*</li>)*)").unwrap()
        })
        .replace_all(&text, "<ul>\n$1\n</ul>")
        .into_owned()
}

/// Convert `**bold**` and `*italic*` inline spans.
fn format_inline_emphasis(text: &str) -> String {
    static BOLD_RE: OnceLock<Regex> = OnceLock::new();
    static ITALIC_RE: OnceLock<Regex> = OnceLock::new();

    let text = BOLD_RE
        .get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
        .replace_all(text, "<strong>$1</strong>");

    ITALIC_RE
        .get_or_init(|| Regex::new(r"\*(.+?)\*").unwrap())
        .replace_all(&text, "<em>$1</em>")
        .into_owned()
}

/// Split remaining text on blank lines and wrap paragraphs that do not
/// already start with a tag in `<p>`.
fn wrap_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|paragraph| {
            let trimmed = paragraph.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('<') {
                format!("<p>{}</p>", paragraph)
            } else {
                paragraph.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
