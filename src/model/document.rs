//! Document-level types: the layout input and the outline output.

use super::{HeadingLevel, Page};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extracted layout of a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Name of the original document (e.g., "report.pdf"), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl LayoutDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from pages.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            source: None,
            pages,
        }
    }

    /// Set the source document name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// File name component of `source`, if any.
    pub fn source_name(&self) -> Option<&str> {
        let source = self.source.as_deref()?;
        Path::new(source)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
    }
}

/// The inferred title and heading list of a document.
///
/// Field names are the persisted keys (`title`, `outline`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Document title
    pub title: String,

    /// Headings in discovery order
    pub outline: Vec<OutlineEntry>,
}

impl Outline {
    /// Create an outline with a title and no headings.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Add a heading entry.
    pub fn push(&mut self, entry: OutlineEntry) {
        self.outline.push(entry);
    }

    /// Check if no headings were found.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Number of heading entries.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Iterate over entries of one level.
    pub fn headings_at(&self, level: HeadingLevel) -> impl Iterator<Item = &OutlineEntry> {
        self.outline.iter().filter(move |e| e.level == level)
    }

    /// Nested view of the outline.
    pub fn to_tree(&self) -> OutlineTree {
        OutlineTree::from_outline(self)
    }
}

/// A single heading in the flat outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading text
    pub text: String,

    /// Assigned level
    pub level: HeadingLevel,

    /// Page number (1-indexed)
    pub page: u32,

    /// Top edge of the heading block
    pub y_pos: f64,
}

impl OutlineEntry {
    /// Create a new entry.
    pub fn new(text: impl Into<String>, level: HeadingLevel, page: u32, y_pos: f64) -> Self {
        Self {
            text: text.into(),
            level,
            page,
            y_pos,
        }
    }
}

/// Hierarchical view of an [`Outline`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutlineTree {
    /// Document title
    pub title: String,

    /// Top-level nodes
    pub items: Vec<OutlineNode>,
}

impl OutlineTree {
    /// Nest a flat outline by heading level.
    ///
    /// Each entry becomes a child of the closest preceding entry with a
    /// shallower level; entries with no such ancestor stay at the top.
    pub fn from_outline(outline: &Outline) -> Self {
        let mut items = Vec::new();
        for entry in &outline.outline {
            insert_node(&mut items, OutlineNode::from(entry));
        }
        Self {
            title: outline.title.clone(),
            items,
        }
    }

    /// Get the total number of nodes (including nested).
    pub fn total_items(&self) -> usize {
        fn count_items(items: &[OutlineNode]) -> usize {
            items
                .iter()
                .map(|item| 1 + count_items(&item.children))
                .sum()
        }
        count_items(&self.items)
    }
}

fn insert_node(items: &mut Vec<OutlineNode>, node: OutlineNode) {
    match items.last_mut() {
        Some(last) if last.level < node.level => insert_node(&mut last.children, node),
        _ => items.push(node),
    }
}

/// A heading with its nested subheadings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineNode {
    /// Heading text
    pub text: String,

    /// Heading level
    pub level: HeadingLevel,

    /// Page number (1-indexed)
    pub page: u32,

    /// Child headings
    pub children: Vec<OutlineNode>,
}

impl From<&OutlineEntry> for OutlineNode {
    fn from(entry: &OutlineEntry) -> Self {
        Self {
            text: entry.text.clone(),
            level: entry.level,
            page: entry.page,
            children: Vec::new(),
        }
    }
}
