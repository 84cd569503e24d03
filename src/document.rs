//! Document Input
//!
//! The read-only view of a document that the label formatter and renderers
//! consume. Anything exposing an optional domain and title can be formatted.

use serde::{Deserialize, Serialize};

/// Structural input for the formatter: an optional domain and title
pub trait Document {
    fn domain(&self) -> Option<&str>;
    fn title(&self) -> Option<&str>;
}

/// Owned document fields, as read from JSON input
///
/// Missing keys and explicit `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocumentView {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl DocumentView {
    pub fn new(domain: Option<&str>, title: Option<&str>) -> Self {
        Self {
            domain: domain.map(str::to_string),
            title: title.map(str::to_string),
        }
    }
}

impl Document for DocumentView {
    fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl<T: Document + ?Sized> Document for &T {
    fn domain(&self) -> Option<&str> {
        (**self).domain()
    }

    fn title(&self) -> Option<&str> {
        (**self).title()
    }
}

/// Borrowed `(domain, title)` pair
impl Document for (Option<&str>, Option<&str>) {
    fn domain(&self) -> Option<&str> {
        self.0
    }

    fn title(&self) -> Option<&str> {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let doc: DocumentView = serde_json::from_str(r#"{"title": null}"#).expect("parse");
        assert_eq!(doc, DocumentView::default());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let doc: DocumentView =
            serde_json::from_str(r#"{"domain": "example.com", "uri": "https://example.com/"}"#)
                .expect("parse");
        assert_eq!(doc.domain(), Some("example.com"));
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_tuple_document() {
        let doc: (Option<&str>, Option<&str>) = (Some("example.com"), None);
        assert_eq!(doc.domain(), Some("example.com"));
        assert_eq!(doc.title(), None);
    }
}
