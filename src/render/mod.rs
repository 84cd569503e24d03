//! Document Rendering
//!
//! Renders documents with their domain labels for display. Each document
//! becomes one line of output in the selected format; line breaks and other
//! control characters inside document text are replaced by spaces.

pub mod html;
pub mod text;

use std::borrow::Cow;
use std::io::{self, Write};

use serde::Deserialize;

use crate::document::Document;
use crate::label::format_domain_label;

/// Output format for rendered documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text for terminals: `Title (domain)`
    #[default]
    Text,
    /// One `<li>` element per document
    Html,
    /// One JSON object per document (JSON Lines)
    Json,
}

/// Render a single document as one line, without a trailing newline
pub fn render_document<D: Document + ?Sized>(document: &D, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::render_item(document),
        OutputFormat::Html => html::render_item(document).into_string(),
        OutputFormat::Json => render_json_item(document),
    }
}

/// Render all documents, one per line
pub fn render_documents<D: Document>(documents: &[D], format: OutputFormat) -> String {
    let mut output = String::new();
    for document in documents {
        output.push_str(&render_document(document, format));
        output.push('\n');
    }
    output
}

/// Render documents straight into a writer
pub fn write_documents<D, W>(writer: &mut W, documents: &[D], format: OutputFormat) -> io::Result<()>
where
    D: Document,
    W: Write,
{
    for document in documents {
        writeln!(writer, "{}", render_document(document, format))?;
    }
    writer.flush()
}

/// Replace control characters (line breaks, tabs, escapes) with spaces
pub(crate) fn single_line(text: &str) -> Cow<'_, str> {
    if !text.contains(char::is_control) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|ch| if ch.is_control() { ' ' } else { ch })
            .collect(),
    )
}

fn render_json_item<D: Document + ?Sized>(document: &D) -> String {
    serde_json::json!({
        "title": document.title(),
        "domain": document.domain(),
        "label": format_domain_label(document).as_str(),
    })
    .to_string()
}
