//! Domain Label
//!
//! Formats the short parenthesized domain label shown next to a document's
//! title, suppressing it when it is empty or would repeat the title.
//!
//! This library provides:
//! - Markup escaping and the `Markup` type for already-escaped text
//! - The domain label formatter
//! - Text, HTML and JSON renderers for document lists
//! - Document input and configuration for the `domain-label` binary

pub mod cli;
pub mod config;
pub mod document;
pub mod input;
pub mod label;
pub mod markup;
pub mod render;

// Re-exports for clean public API
pub use config::Config;
pub use document::{Document, DocumentView};
pub use label::format_domain_label;
pub use markup::{escape, unescape, Markup};
pub use render::{render_document, render_documents, OutputFormat};
