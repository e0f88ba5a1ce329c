//! Page-level layout primitives supplied by the ingestion adapter.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An axis-aligned bounding box in layout units.
///
/// Coordinates follow the PDF convention: the origin is at the bottom-left
/// of the page, so `y1` is the top edge and `y0` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    /// Left edge
    pub x0: f64,
    /// Bottom edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y1
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y0
    }

    /// Element-wise min/max of two boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// A run of characters sharing one rendered size and font.
///
/// An adapter may emit one run per glyph or coalesce consecutive glyphs;
/// feature extraction weighs every non-whitespace character individually
/// either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharRun {
    /// The text content
    pub text: String,

    /// Rendered font size in points
    pub size: f64,

    /// Font name (e.g., "Helvetica-Bold")
    #[serde(rename = "font", default)]
    pub font_name: String,
}

impl CharRun {
    /// Create a new run.
    pub fn new(text: impl Into<String>, size: f64, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size,
            font_name: font_name.into(),
        }
    }

    /// Whether the font name marks this run as bold.
    pub fn is_bold(&self) -> bool {
        self.font_name.to_lowercase().contains("bold")
    }
}

/// Read-only view shared by raw text boxes and merged blocks.
pub trait LayoutBox {
    /// Bounding box of the block.
    fn bbox(&self) -> BBox;

    /// Text content, untrimmed.
    fn text(&self) -> Cow<'_, str>;

    /// Character runs in reading order.
    fn runs(&self) -> impl Iterator<Item = &CharRun>;
}

/// A text box as produced by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTextBox {
    /// Bounding box
    #[serde(flatten)]
    pub bbox: BBox,

    /// Character runs
    #[serde(default)]
    pub runs: Vec<CharRun>,
}

impl RawTextBox {
    /// Create a text box from its bounding box and runs.
    pub fn new(bbox: BBox, runs: Vec<CharRun>) -> Self {
        Self { bbox, runs }
    }

    /// Create a text box holding a single run.
    pub fn single(bbox: BBox, text: impl Into<String>, size: f64, font_name: &str) -> Self {
        Self::new(bbox, vec![CharRun::new(text, size, font_name)])
    }
}

impl LayoutBox for RawTextBox {
    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn text(&self) -> Cow<'_, str> {
        match self.runs.as_slice() {
            [] => Cow::Borrowed(""),
            [run] => Cow::Borrowed(run.text.as_str()),
            runs => Cow::Owned(runs.iter().map(|r| r.text.as_str()).collect()),
        }
    }

    fn runs(&self) -> impl Iterator<Item = &CharRun> {
        self.runs.iter()
    }
}

/// A single page of extracted layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page height in layout units, if the adapter could determine it
    #[serde(default)]
    pub height: Option<f64>,

    /// Text boxes on the page, in no particular order
    #[serde(default)]
    pub boxes: Vec<RawTextBox>,
}

impl Page {
    /// Create a page with a known height.
    pub fn new(height: f64) -> Self {
        Self {
            height: Some(height),
            boxes: Vec::new(),
        }
    }

    /// Add a text box to the page.
    pub fn add_box(&mut self, text_box: RawTextBox) {
        self.boxes.push(text_box);
    }

    /// Builder-style variant of [`Page::add_box`].
    pub fn with_box(mut self, text_box: RawTextBox) -> Self {
        self.boxes.push(text_box);
        self
    }

    /// Page height, or `fallback` when missing, zero, or not finite.
    pub fn height_or(&self, fallback: f64) -> f64 {
        match self.height {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => fallback,
        }
    }

    /// Check if the page has no text boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_union_and_center() {
        let a = BBox::new(100.0, 700.0, 300.0, 720.0);
        let b = BBox::new(90.0, 680.0, 280.0, 698.0);
        let u = a.union(&b);
        assert_eq!(u, BBox::new(90.0, 680.0, 300.0, 720.0));
        assert_eq!(a.center_x(), 200.0);
    }

    #[test]
    fn test_char_run_bold_detection() {
        assert!(CharRun::new("A", 12.0, "Helvetica-Bold").is_bold());
        assert!(CharRun::new("A", 12.0, "ABCDEF+Arial,BOLD").is_bold());
        assert!(!CharRun::new("A", 12.0, "Helvetica-Oblique").is_bold());
        assert!(!CharRun::new("A", 12.0, "").is_bold());
    }

    #[test]
    fn test_raw_box_text_concatenates_runs() {
        let bbox = BBox::new(0.0, 0.0, 10.0, 10.0);
        let text_box = RawTextBox::new(
            bbox,
            vec![
                CharRun::new("Hello ", 12.0, "Times"),
                CharRun::new("world", 12.0, "Times-Bold"),
            ],
        );
        assert_eq!(text_box.text(), "Hello world");
        assert_eq!(text_box.runs().count(), 2);

        let empty = RawTextBox::new(bbox, vec![]);
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_page_height_fallback() {
        assert_eq!(Page::new(792.0).height_or(1000.0), 792.0);
        assert_eq!(Page::new(0.0).height_or(1000.0), 1000.0);
        assert_eq!(Page::default().height_or(1000.0), 1000.0);
        assert_eq!(Page::new(f64::NAN).height_or(1000.0), 1000.0);
    }

    #[test]
    fn test_raw_box_deserializes_flat_bbox() {
        let json = r#"{"x0":1,"y0":2,"x1":3,"y1":4,"runs":[{"text":"A","size":9.5,"font":"Arial"}]}"#;
        let text_box: RawTextBox = serde_json::from_str(json).unwrap();
        assert_eq!(text_box.bbox, BBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(text_box.runs[0].font_name, "Arial");
    }
}
