//! Logical blocks assembled from adjacent raw text boxes.

use super::{BBox, CharRun, LayoutBox, RawTextBox};
use std::borrow::Cow;

/// One or more raw text boxes that form a single visual paragraph.
///
/// The block borrows its constituents; runs are iterated by chaining the
/// constituents' runs in merge order.
#[derive(Debug, Clone)]
pub struct MergedBlock<'a> {
    boxes: Vec<&'a RawTextBox>,
    text: String,
    bbox: BBox,
}

impl<'a> MergedBlock<'a> {
    /// Start a block from its first box.
    pub fn new(first: &'a RawTextBox) -> Self {
        Self {
            boxes: vec![first],
            text: first.text().trim().to_string(),
            bbox: first.bbox,
        }
    }

    /// Append a box, extending the text and bounding box.
    pub fn push(&mut self, next: &'a RawTextBox) {
        self.text.push(' ');
        self.text.push_str(next.text().trim());
        self.bbox = self.bbox.union(&next.bbox);
        self.boxes.push(next);
    }

    /// The most recently appended box.
    pub fn last(&self) -> &'a RawTextBox {
        // A block always holds at least the box it was created from.
        self.boxes[self.boxes.len() - 1]
    }

    /// Constituent boxes in merge order.
    pub fn boxes(&self) -> &[&'a RawTextBox] {
        &self.boxes
    }

    /// Number of constituent boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The joined text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl LayoutBox for MergedBlock<'_> {
    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn runs(&self) -> impl Iterator<Item = &CharRun> {
        self.boxes.iter().flat_map(|b| b.runs.iter())
    }
}
