//! HTML list-item rendering.

use crate::document::Document;
use crate::label::format_domain_label;
use crate::markup::{escape_str, Markup};

use super::single_line;

/// Render a document as an `<li>` element
///
/// The title is escaped; the domain span is omitted when the label is empty.
/// Line breaks in the text become spaces so each item stays on one line.
pub fn render_item<D: Document + ?Sized>(document: &D) -> Markup {
    let title = escape_str(document.title().unwrap_or_default());
    let label = format_domain_label(document);

    let mut item = format!(r#"<li class="document"><span class="document-title">{title}</span>"#);
    if !label.is_empty() {
        item.push_str(&format!(r#" <span class="document-domain">{label}</span>"#));
    }
    item.push_str("</li>");

    Markup::from_trusted(single_line(&item).into_owned())
}
