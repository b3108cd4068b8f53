//! Export formats for a finished explanation.
//!
//! Every renderer is a pure function of the artifact; delivering the payload
//! (writing a file, copying to a clipboard) is left to the caller.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::AppError;
use crate::synth::ExplanationArtifact;

const MARKDOWN_FILE_NAME: &str = "documentation-explanation.md";
const HTML_FILE_NAME: &str = "documentation-explanation.html";
const SHARE_FILE_NAME: &str = "documentation-explanation.txt";
const DOCUMENT_TITLE: &str = "Documentation Explanation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    /// Standalone HTML page, printable to PDF
    Html,
    /// Plain-text digest for the clipboard
    Share,
    Download,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            "share" => Ok(ExportFormat::Share),
            "download" => Ok(ExportFormat::Download),
            other => Err(AppError::Validation(format!("unknown export format '{}'", other))),
        }
    }
}

/// A rendered document ready to be written or copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPayload {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub body: String,
}

/// Render `artifact` in the requested format.
pub fn render(artifact: &ExplanationArtifact, format: ExportFormat) -> ExportPayload {
    match format {
        ExportFormat::Markdown | ExportFormat::Download => ExportPayload {
            file_name: MARKDOWN_FILE_NAME,
            mime: "text/markdown",
            body: to_markdown(artifact),
        },
        ExportFormat::Html => ExportPayload {
            file_name: HTML_FILE_NAME,
            mime: "text/html",
            body: to_html(artifact),
        },
        ExportFormat::Share => ExportPayload {
            file_name: SHARE_FILE_NAME,
            mime: "text/plain",
            body: to_share_text(artifact),
        },
    }
}

/// Pretty JSON with camelCase field names.
pub fn to_json(artifact: &ExplanationArtifact) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(artifact)?)
}

pub fn to_markdown(artifact: &ExplanationArtifact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", DOCUMENT_TITLE);
    let _ = writeln!(out, "## Summary\n\n{}\n", artifact.summary);
    let _ = writeln!(out, "## Analogy\n\n{}\n", artifact.analogy);
    let _ = writeln!(out, "## Code Example\n\n```\n{}\n```\n", artifact.code_example);

    out.push_str("## Use Cases\n\n");
    for item in &artifact.use_cases {
        let _ = writeln!(out, "- {}", item);
    }

    out.push_str("\n## Key Points\n\n");
    for item in &artifact.key_points {
        let _ = writeln!(out, "- {}", item);
    }
    out
}

pub fn to_html(artifact: &ExplanationArtifact) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", DOCUMENT_TITLE);
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", DOCUMENT_TITLE);

    out.push_str("<h2>Summary</h2>\n");
    for paragraph in artifact.summary.split('\n').filter(|p| !p.trim().is_empty()) {
        let _ = writeln!(out, "<p>{}</p>", escape_html(paragraph));
    }

    let _ = writeln!(out, "<h2>Analogy</h2>\n<p>{}</p>", escape_html(&artifact.analogy));
    let _ = writeln!(
        out,
        "<h2>Code Example</h2>\n<pre><code>{}</code></pre>",
        escape_html(&artifact.code_example)
    );

    push_html_list(&mut out, "Use Cases", &artifact.use_cases);
    push_html_list(&mut out, "Key Points", &artifact.key_points);

    out.push_str("</body>\n</html>\n");
    out
}

fn push_html_list(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "<h2>{}</h2>\n<ul>", heading);
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>\n");
}

pub fn to_share_text(artifact: &ExplanationArtifact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n\n{}\n\nKey Points:", DOCUMENT_TITLE, artifact.summary);
    for item in &artifact.key_points {
        let _ = writeln!(out, "- {}", item);
    }
    out
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("AT&T <Company>"), "AT&amp;T &lt;Company&gt;");
        assert_eq!(escape_html("it's \"x\""), "it&#x27;s &quot;x&quot;");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("Markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!(" share ".parse::<ExportFormat>().unwrap(), ExportFormat::Share);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
