//! Domain Label Formatting
//!
//! Produces the short parenthesized domain shown next to a document's title.
//! The label is suppressed when there is no domain or when it would just
//! repeat the title.

use crate::document::Document;
use crate::markup::{escape_str, Markup};

/// Format the domain label for a document
///
/// Both fields are escaped before they are compared, so a domain and title
/// that differ only in characters escaping normalises count as equal.
/// Absent fields are treated as empty strings. The result is already
/// escaped and can be inserted into markup as-is.
pub fn format_domain_label<D: Document + ?Sized>(document: &D) -> Markup {
    let domain = escape_str(document.domain().unwrap_or_default());
    let title = escape_str(document.title().unwrap_or_default());

    if domain.is_empty() || domain == title {
        return Markup::new();
    }

    Markup::from_trusted(format!("({domain})"))
}
