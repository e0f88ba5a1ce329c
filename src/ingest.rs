//! Loading of serialized page layouts.
//!
//! Layout documents are JSON produced by an external extractor:
//!
//! ```json
//! {
//!   "source": "report.pdf",
//!   "pages": [
//!     {
//!       "height": 792.0,
//!       "boxes": [
//!         { "x0": 72.0, "y0": 700.0, "x1": 300.0, "y1": 716.0,
//!           "runs": [ { "text": "1. Introduction", "size": 16.0, "font": "Arial-Bold" } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::model::LayoutDocument;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a layout document from a JSON string.
///
/// # Example
///
/// ```
/// use pdfoutline::ingest::parse_layout_str;
///
/// let doc = parse_layout_str(r#"{"pages": [{"height": 792.0, "boxes": []}]}"#).unwrap();
/// assert_eq!(doc.page_count(), 1);
/// ```
pub fn parse_layout_str(json: &str) -> Result<LayoutDocument> {
    let doc: LayoutDocument = serde_json::from_str(json)?;
    validate_layout(&doc)?;
    Ok(doc)
}

/// Parse a layout document from a reader.
pub fn parse_layout_reader<R: Read>(reader: R) -> Result<LayoutDocument> {
    let doc: LayoutDocument = serde_json::from_reader(reader)?;
    validate_layout(&doc)?;
    Ok(doc)
}

/// Load a layout document from a file.
pub fn load_layout_file<P: AsRef<Path>>(path: P) -> Result<LayoutDocument> {
    let path = path.as_ref();
    let file = File::open(path)?;
    log::debug!("Loading layout from {}", path.display());
    parse_layout_reader(BufReader::new(file))
}

/// Check that every coordinate and font size is usable.
///
/// Page heights are not checked here; a missing or unusable height falls
/// back to the configured default during analysis.
pub fn validate_layout(doc: &LayoutDocument) -> Result<()> {
    for (page_index, page) in doc.pages.iter().enumerate() {
        let page_num = page_index + 1;
        for (box_index, text_box) in page.boxes.iter().enumerate() {
            let b = text_box.bbox;
            if ![b.x0, b.y0, b.x1, b.y1].iter().all(|v| v.is_finite()) {
                return Err(Error::InvalidLayout(format!(
                    "page {}, box {}: non-finite coordinate",
                    page_num, box_index
                )));
            }
            if let Some(run) = text_box
                .runs
                .iter()
                .find(|r| !r.size.is_finite() || r.size < 0.0)
            {
                return Err(Error::InvalidLayout(format!(
                    "page {}, box {}: invalid font size {}",
                    page_num, box_index, run.size
                )));
            }
        }
    }
    Ok(())
}

/// Title to fall back on when no block qualifies.
///
/// Prefers the file name recorded in the layout's `source`; otherwise uses
/// the layout file's own name.
pub fn default_title(doc: &LayoutDocument, layout_path: &Path) -> String {
    if let Some(name) = doc.source_name() {
        return name.to_string();
    }
    layout_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_minimal_layout() {
        let doc = parse_layout_str("{}").unwrap();
        assert!(doc.is_empty());
        assert!(doc.source.is_none());
    }

    #[test]
    fn test_parse_full_layout() {
        let json = r#"{
            "source": "reports/q3.pdf",
            "pages": [
                {
                    "height": 792.0,
                    "boxes": [
                        {"x0": 72, "y0": 700, "x1": 300, "y1": 716,
                         "runs": [{"text": "Summary", "size": 16, "font": "Arial-Bold"}]}
                    ]
                },
                {"boxes": []}
            ]
        }"#;
        let doc = parse_layout_str(json).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].boxes[0].runs[0].text, "Summary");
        assert!(doc.pages[0].boxes[0].runs[0].is_bold());
        assert_eq!(doc.pages[1].height, None);
        assert_eq!(doc.source_name(), Some("q3.pdf"));
    }

    #[test]
    fn test_rejects_negative_size() {
        let json = r#"{"pages": [{"boxes": [
            {"x0": 0, "y0": 0, "x1": 1, "y1": 1, "runs": [{"text": "x", "size": -3}]}
        ]}]}"#;
        let err = parse_layout_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout(_)));
        assert!(err.to_string().contains("page 1, box 0"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_layout_str(r#"{"pages": [{"boxes": [{"x0": "left"}]}]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_default_title() {
        let path = PathBuf::from("layouts/annual.json");
        let doc = LayoutDocument::new().with_source("annual.pdf");
        assert_eq!(default_title(&doc, &path), "annual.pdf");
        assert_eq!(default_title(&LayoutDocument::new(), &path), "annual.json");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_layout_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
