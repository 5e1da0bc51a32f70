//! HTML ingestion into the retained document model.
//!
//! Parses an HTML string (or file) with `scraper` and walks the element tree
//! in document order. The `id` and `class` attributes are decomposed into the
//! element's id field and class list; all other attributes are kept verbatim.
//! Elements without an `id` receive a generated one.

use std::path::Path;

use anyhow::{Context, Result};
use ego_tree::NodeRef;
use scraper::{Html, Node};
use tracing::debug;

use crate::document::{Document, ReadyState};
use crate::element::Element;

impl Document {
    /// Parse an HTML string into a document.
    ///
    /// Parsing is error-tolerant (as HTML parsing is) and therefore never
    /// fails. The returned document starts in `Loading`; the host flips it
    /// to `Complete` once its own setup is done.
    pub fn from_html(html: &str) -> Document {
        let parsed = Html::parse_document(html);
        let mut document = Document::new();
        document.set_ready_state(ReadyState::Loading);
        let mut ids = IdGenerator::new();
        convert_children(parsed.tree.root(), &mut document, &mut ids);
        debug!(nodes = document.len(), "ingested HTML document");
        document
    }

    /// Read and parse an HTML file.
    pub fn from_file(path: &Path) -> Result<Document> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read HTML file '{}'", path.display()))?;
        Ok(Document::from_html(&html))
    }
}

fn convert_children(node: NodeRef<'_, Node>, document: &mut Document, ids: &mut IdGenerator) {
    for child in node.children() {
        if let Node::Element(el) = child.value() {
            let id = match el.attr("id") {
                // Duplicate explicit ids would silently replace the earlier
                // node; fall back to a generated id for the later one.
                Some(explicit) if !explicit.is_empty() && !document.contains(explicit) => {
                    explicit.to_string()
                }
                _ => ids.next_id(),
            };
            let mut element = Element::new(id, el.name().to_string());
            for class in el.classes() {
                element.add_class(class);
            }
            for (name, value) in el.attrs() {
                if name == "id" || name == "class" {
                    continue;
                }
                element.set_attribute(name, value);
            }
            document.insert(element);
        }
        convert_children(child, document, ids);
    }
}

struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    fn new() -> Self {
        Self { counter: 1 }
    }

    fn next_id(&mut self) -> String {
        let id = format!("el{:04}", self.counter);
        self.counter += 1;
        id
    }
}
