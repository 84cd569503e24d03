//! Plain text rendering for terminal output.

use crate::document::Document;
use crate::label::format_domain_label;

use super::single_line;

/// Render `Title (domain)` with the label's markup decoded
///
/// Control characters are replaced so the result is a single terminal line.
pub fn render_item<D: Document + ?Sized>(document: &D) -> String {
    let markup = format_domain_label(document);
    let label = markup.decode();
    let title = document.title().unwrap_or_default();

    let line = [title, &*label]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    single_line(&line).into_owned()
}
