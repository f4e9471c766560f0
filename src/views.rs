//! HTML Views
//!
//! Server-rendered pages assembled as HTML strings. Values interpolated into
//! the page shell are escaped; section bodies come from the Markdown
//! formatter, which deliberately does not re-escape its input.

use std::fmt::Write;

use crate::models::analysis::DocumentRecord;
use crate::models::settings::AppConfig;

/// Escape a value for safe interpolation into HTML text or attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #1f2937; max-width: 960px; margin: 0 auto; padding: 24px; }
nav { margin-bottom: 24px; }
nav a { margin-right: 16px; color: #0ea5e9; text-decoration: none; }
h1, h2, h3, h4 { color: #111827; }
.error { background: #fef2f2; border: 1px solid #fca5a5; color: #991b1b; padding: 12px 16px; border-radius: 8px; margin-bottom: 16px; }
.notice { background: #f0fdf4; border: 1px solid #86efac; color: #166534; padding: 12px 16px; border-radius: 8px; margin-bottom: 16px; }
.section { border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px 24px; margin-bottom: 24px; }
.muted { color: #6b7280; }
table.markdown-table { border-collapse: collapse; margin: 12px 0; }
table.markdown-table th, table.markdown-table td { border: 1px solid #d1d5db; padding: 6px 12px; text-align: left; }
table.markdown-table th { background: #f3f4f6; }
form label { display: block; margin-top: 12px; font-weight: 600; }
form input[type=text], form input[type=password], form select, form textarea { width: 100%; max-width: 480px; padding: 6px 8px; margin-top: 4px; }
button { margin-top: 16px; padding: 8px 20px; background: #0ea5e9; color: white; border: none; border-radius: 6px; cursor: pointer; }
"#;

/// Wrap page content in the common shell
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - Chronos</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Upload</a><a href="/settings">Settings</a></nav>
{body}
</body>
</html>"#,
        title = html_escape(title),
        body = body,
    )
}

/// The upload page, with an optional error banner
pub fn index_page(error: Option<&str>) -> String {
    let banner = error
        .map(|e| format!(r#"<div class="error">{}</div>"#, html_escape(e)))
        .unwrap_or_default();

    let body = format!(
        r#"{banner}
<h1>Chronos</h1>
<p>Upload a requirements document (PDF) to generate a project charter, backlog, estimation, roadmap, methodology and risk register.</p>
<form action="/upload" method="post" enctype="multipart/form-data">
<label for="file">Requirements document (PDF, max 16 MiB)</label>
<input type="file" id="file" name="file" accept=".pdf" required>
<button type="submit">Upload</button>
</form>"#
    );
    page("Upload", &body)
}

/// The analysis page for one document.
///
/// `sections` holds (title, formatted HTML) pairs when an analysis result
/// exists; `error` carries the single user-facing message of a failed run.
pub fn analysis_page(
    document: &DocumentRecord,
    sections: Option<&[(String, String)]>,
    error: Option<&str>,
) -> String {
    let mut body = String::new();

    if let Some(e) = error {
        let _ = write!(body, r#"<div class="error">{}</div>"#, html_escape(e));
    }

    let _ = write!(
        body,
        r#"<h1>Analysis</h1>
<p class="muted">Document: {}</p>
<form action="/analyze/{}" method="post">
<label for="additional_info">Additional information (optional)</label>
<textarea id="additional_info" name="additional_info" rows="3" placeholder="Technology constraints, team size, deadlines..."></textarea>
<button type="submit">Run analysis</button>
</form>"#,
        html_escape(&document.filename),
        html_escape(&document.id),
    );

    match sections {
        Some(sections) => {
            for (title, html) in sections {
                let _ = write!(
                    body,
                    r#"
<div class="section">
<h2>{}</h2>
{}
</div>"#,
                    html_escape(title),
                    html
                );
            }
        }
        None => {
            body.push_str(r#"<p class="muted">No analysis has been run for this document yet.</p>"#);
        }
    }

    page("Analysis", &body)
}

/// The settings page, with an optional notice banner
pub fn settings_page(config: &AppConfig, notice: Option<&str>) -> String {
    let banner = notice
        .map(|n| format!(r#"<div class="notice">{}</div>"#, html_escape(n)))
        .unwrap_or_default();

    let selected = |p: &str| {
        if config.provider.eq_ignore_ascii_case(p) {
            " selected"
        } else {
            ""
        }
    };

    let body = format!(
        r#"{banner}
<h1>Settings</h1>
<form action="/settings" method="post">
<label for="provider">Active provider</label>
<select id="provider" name="provider">
<option value="anthropic"{sel_anthropic}>anthropic</option>
<option value="openai"{sel_openai}>openai</option>
<option value="openrouter"{sel_openrouter}>openrouter</option>
</select>

<h2>Anthropic</h2>
<label for="anthropic_api_key">API key</label>
<input type="password" id="anthropic_api_key" name="anthropic_api_key" value="{anthropic_key}">
<label for="anthropic_model">Model</label>
<input type="text" id="anthropic_model" name="anthropic_model" value="{anthropic_model}">

<h2>OpenAI</h2>
<label for="openai_api_key">API key</label>
<input type="password" id="openai_api_key" name="openai_api_key" value="{openai_key}">
<label for="openai_model">Model</label>
<input type="text" id="openai_model" name="openai_model" value="{openai_model}">

<h2>OpenRouter</h2>
<label for="openrouter_api_key">API key</label>
<input type="password" id="openrouter_api_key" name="openrouter_api_key" value="{openrouter_key}">
<label for="openrouter_model">Model</label>
<input type="text" id="openrouter_model" name="openrouter_model" value="{openrouter_model}">

<button type="submit">Save</button>
</form>
<form action="/settings/health" method="post">
<button type="submit">Test active provider</button>
</form>"#,
        sel_anthropic = selected("anthropic"),
        sel_openai = selected("openai"),
        sel_openrouter = selected("openrouter"),
        anthropic_key = html_escape(&config.anthropic_api_key),
        anthropic_model = html_escape(&config.anthropic_model),
        openai_key = html_escape(&config.openai_api_key),
        openai_model = html_escape(&config.openai_model),
        openrouter_key = html_escape(&config.openrouter_api_key),
        openrouter_model = html_escape(&config.openrouter_model),
    );

    page("Settings", &body)
}

/// A bare error page for errors that escape a handler
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        r#"<h1>Error {status}</h1>
<div class="error">{}</div>
<p><a href="/">Back to upload</a></p>"#,
        html_escape(message),
    );
    page("Error", &body)
}
