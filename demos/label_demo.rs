use domain_label::{format_domain_label, render_document, DocumentView, OutputFormat};

fn main() {
    println!("=== Domain Label Demo ===");

    let documents = [
        DocumentView::new(Some("example.com"), Some("Example")),
        DocumentView::new(Some("example.com"), Some("example.com")),
        DocumentView::new(Some(""), Some("Example")),
        DocumentView::new(None, None),
        DocumentView::new(Some("<b>.com"), Some("x")),
    ];

    for doc in &documents {
        println!("\nInput: {:?}", doc);
        println!("Label: '{}'", format_domain_label(doc));
        println!("HTML:  {}", render_document(doc, OutputFormat::Html));
    }
}
