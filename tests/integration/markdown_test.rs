//! Markdown Formatter Tests
//!
//! Pin the observable formatting contract: tables, verbatim heading
//! anchors, single-list wrapping of contiguous bullets, and inline
//! emphasis.

use chronos_web::services::markdown::format_markdown;

#[test]
fn test_pipe_table_structure() {
    let html = format_markdown("| A | B |\n|---|---|\n| 1 | 2 |\n");

    let thead_start = html.find("<thead>").unwrap();
    let thead_end = html.find("</thead>").unwrap();
    let header = &html[thead_start..thead_end];
    assert!(header.contains("<th>A</th>"));
    assert!(header.contains("<th>B</th>"));

    let tbody_start = html.find("<tbody>").unwrap();
    let tbody_end = html.find("</tbody>").unwrap();
    let body = &html[tbody_start..tbody_end];
    assert!(body.contains("<td>1</td>"));
    assert!(body.contains("<td>2</td>"));
    assert_eq!(body.matches("<tr>").count(), 1);
}

#[test]
fn test_table_with_multiple_data_rows() {
    let html = format_markdown("| ID | Risk |\n|----|------|\n| R1 | Scope |\n| R2 | Churn |\n");
    assert!(html.contains("<td>R1</td>"));
    assert!(html.contains("<td>R2</td>"));
    assert_eq!(html.matches("<table").count(), 1);
}

#[test]
fn test_h1_anchor_is_heading_text_verbatim() {
    let html = format_markdown("# Title\n");
    assert!(html.contains(r#"<h1 id="Title">Title</h1>"#));
}

#[test]
fn test_anchor_not_slugified() {
    // Anchors keep spaces and punctuation; duplicates are possible by design
    let html = format_markdown("## Phase 1: Foundations\n");
    assert!(html.contains(r#"<h2 id="Phase 1: Foundations">Phase 1: Foundations</h2>"#));
}

#[test]
fn test_bold_and_italic_spans() {
    let html = format_markdown("**bold** and *italic*");
    assert!(html.contains("<strong>bold</strong> and <em>italic</em>"));
}

#[test]
fn test_two_bullets_one_list() {
    let html = format_markdown("- item one\n- item two\n");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn test_prose_between_bullet_runs_splits_lists() {
    let html = format_markdown("- a\n\nmiddle paragraph\n\n- b\n");
    assert_eq!(html.matches("<ul>").count(), 2);
    assert!(html.contains("<p>middle paragraph</p>"));
}

#[test]
fn test_paragraphs_not_starting_with_tag_are_wrapped() {
    let html = format_markdown("First paragraph.\n\nSecond paragraph.");
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn test_crlf_input() {
    let html = format_markdown("# Heading\r\n\r\n- item\r\n");
    assert!(html.contains(r#"<h1 id="Heading">Heading</h1>"#));
    assert!(html.contains("<li>item</li>"));
}

#[test]
fn test_formatter_composes_across_features() {
    let section = "# Effort Estimation\n\n\
        Estimates use **T-shirt sizes**.\n\n\
        | US | Size |\n|----|------|\n| US1 | M |\n\n\
        - contingency *20%*\n- QA 30%\n";
    let html = format_markdown(section);

    assert!(html.contains(r#"<h1 id="Effort Estimation">Effort Estimation</h1>"#));
    assert!(html.contains("<strong>T-shirt sizes</strong>"));
    assert!(html.contains("<td>US1</td>"));
    assert!(html.contains("<em>20%</em>"));
    assert_eq!(html.matches("<ul>").count(), 1);
}
