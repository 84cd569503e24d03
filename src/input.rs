//! Document Input
//!
//! Loads documents from JSON. Two layouts are accepted:
//! - a single JSON array of document objects
//! - JSON Lines, one document object per line (blank lines are skipped)

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::DocumentView;

/// Where documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map a CLI argument to a source; missing or `-` means stdin
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    /// Read and parse all documents from this source
    pub fn load(&self) -> Result<Vec<DocumentView>> {
        match self {
            InputSource::Stdin => read_documents(io::stdin().lock()),
            InputSource::File(path) => read_documents_from_path(path),
        }
    }
}

/// Read documents from any reader
pub fn read_documents<R: Read>(mut reader: R) -> Result<Vec<DocumentView>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read document input")?;
    parse_documents(&content)
}

/// Read documents from a file
pub fn read_documents_from_path(path: &Path) -> Result<Vec<DocumentView>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_documents(&content)
        .with_context(|| format!("Invalid document input: {}", path.display()))
}

/// Parse documents from a JSON array or JSON Lines string
pub fn parse_documents(content: &str) -> Result<Vec<DocumentView>> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        let documents: Vec<DocumentView> =
            serde_json::from_str(trimmed).context("Failed to parse JSON document array")?;
        log::debug!("Parsed {} documents from JSON array", documents.len());
        return Ok(documents);
    }

    let mut documents = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let document: DocumentView = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse document on line {}", line_idx + 1))?;
        documents.push(document);
    }

    log::debug!("Parsed {} documents from JSON Lines", documents.len());
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let docs = parse_documents(
            r#"  [{"domain": "example.com", "title": "Example"}, {"title": "No domain"}]"#,
        )
        .expect("parse");

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].domain.as_deref(), Some("example.com"));
        assert_eq!(docs[1].domain, None);
    }

    #[test]
    fn test_parse_json_lines() {
        let content = "{\"domain\": \"a.org\"}\n\n{\"domain\": null, \"title\": \"B\"}\n";
        let docs = parse_documents(content).expect("parse");

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].domain.as_deref(), Some("a.org"));
        assert_eq!(docs[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn test_array_and_lines_agree() {
        let array = parse_documents(r#"[{"domain": "a.org", "title": "A"}, {}]"#).expect("array");
        let lines = parse_documents("{\"domain\": \"a.org\", \"title\": \"A\"}\n{}").expect("lines");
        assert_eq!(array, lines);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_documents("").expect("parse").is_empty());
        assert!(parse_documents("\n  \n").expect("parse").is_empty());
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = parse_documents("{\"domain\": \"a.org\"}\nnot json\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "unexpected error: {err}");
    }

    #[test]
    fn test_wrong_field_type_is_an_error() {
        assert!(parse_documents(r#"{"domain": 42}"#).is_err());
    }

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some("-".into())), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some("docs.jsonl".into())),
            InputSource::File("docs.jsonl".into())
        );
    }

    #[test]
    fn test_read_documents_from_reader() {
        let docs = read_documents(&b"{\"domain\": \"a.org\"}"[..]).expect("read");
        assert_eq!(docs.len(), 1);
    }
}
