//! # pdfoutline
//!
//! Document title and heading outline inference from PDF page layout.
//!
//! The library takes the positioned text boxes of each page (as produced by
//! any layout extractor), merges them into blocks, picks a title from the
//! first page and classifies heading candidates into H1/H2/H3 using
//! document-wide font-size statistics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{outline_file, render, JsonFormat};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     // Infer the outline of a serialized layout
//!     let outline = outline_file("report.layout.json")?;
//!
//!     // Persist it as JSON
//!     let json = render::to_json(&outline, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Box merging**: vertically adjacent, left-aligned boxes become blocks
//! - **Title scoring**: size, weight, centering and page position
//! - **Heading levels**: percentile thresholds over all candidates
//! - **CJK support**: ideographic headings pass the shape filter
//! - **Parallel processing**: Uses Rayon for directories of documents

pub mod analysis;
pub mod batch;
pub mod error;
pub mod ingest;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analysis::{OutlineAnalysis, OutlineExtractor, OutlineOptions, OutlineStats};
pub use batch::{process_directory, BatchOptions, BatchReport};
pub use error::{Error, Result};
pub use model::{
    BBox, CharRun, HeadingLevel, LayoutBox, LayoutDocument, Outline, OutlineEntry, OutlineTree,
    Page, RawTextBox,
};
pub use render::{JsonFormat, RenderOptions};

use std::path::Path;

/// Infer the outline of an in-memory layout document with default options.
///
/// # Arguments
///
/// * `doc` - The page layout
/// * `default_title` - Title to use when no first-page block qualifies
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline, LayoutDocument};
///
/// let outline = extract_outline(&LayoutDocument::new(), "empty.pdf");
/// assert_eq!(outline.title, "empty.pdf");
/// assert!(outline.outline.is_empty());
/// ```
pub fn extract_outline(doc: &LayoutDocument, default_title: &str) -> Outline {
    OutlineExtractor::new().extract(doc, default_title)
}

/// Load a serialized layout file and infer its outline.
///
/// The default title is the name recorded in the layout's `source`, or the
/// layout file's own name.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::outline_file;
///
/// let outline = outline_file("report.layout.json").unwrap();
/// println!("{} ({} headings)", outline.title, outline.len());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<Outline> {
    PdfOutline::new().outline_file(path).map(Outline::from)
}

/// Infer the outline of a layout file with custom options.
pub fn outline_file_with_options<P: AsRef<Path>>(
    path: P,
    options: OutlineOptions,
) -> Result<Outline> {
    PdfOutline::new()
        .with_options(options)
        .outline_file(path)
        .map(Outline::from)
}

/// Infer the outline of a layout given as a JSON string.
///
/// # Example
///
/// ```
/// use pdfoutline::outline_str;
///
/// let outline = outline_str(r#"{"source": "a/b/paper.pdf", "pages": []}"#).unwrap();
/// assert_eq!(outline.title, "paper.pdf");
/// ```
pub fn outline_str(json: &str) -> Result<Outline> {
    PdfOutline::new().outline_str(json).map(Outline::from)
}

/// Convert a layout file straight to outline JSON.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{to_json, JsonFormat};
///
/// let json = to_json("report.layout.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("report.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let outline = outline_file(path)?;
    render::to_json(&outline, format)
}

/// Convert a layout file to a Markdown table of contents.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let outline = outline_file(path)?;
    Ok(render::to_markdown(&outline, &RenderOptions::default()))
}

/// Builder for inferring and rendering document outlines.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::PdfOutline;
///
/// let markdown = PdfOutline::new()
///     .with_size_floor(10.0)
///     .with_title("Quarterly Report")
///     .outline_file("q3.layout.json")?
///     .to_markdown();
/// # Ok::<(), pdfoutline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfOutline {
    options: OutlineOptions,
    render_options: RenderOptions,
    title: Option<String>,
}

impl PdfOutline {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the analysis options.
    pub fn with_options(mut self, options: OutlineOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the minimum (exclusive) average font size for headings.
    pub fn with_size_floor(mut self, floor: f64) -> Self {
        self.options = self.options.with_size_floor(floor);
        self
    }

    /// Set the horizontal centering reference.
    pub fn with_center(mut self, reference_x: f64, tolerance: f64) -> Self {
        self.options = self.options.with_center(reference_x, tolerance);
        self
    }

    /// Override the fallback title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set render options for Markdown and text output.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Infer the outline of an in-memory document.
    pub fn outline(&self, doc: &LayoutDocument) -> OutlineResult {
        let fallback = self
            .title
            .clone()
            .or_else(|| doc.source_name().map(str::to_string))
            .unwrap_or_default();
        self.finish(doc, &fallback)
    }

    /// Load a layout file and infer its outline.
    pub fn outline_file<P: AsRef<Path>>(&self, path: P) -> Result<OutlineResult> {
        let path = path.as_ref();
        let doc = ingest::load_layout_file(path)?;
        let fallback = match &self.title {
            Some(title) => title.clone(),
            None => ingest::default_title(&doc, path),
        };
        Ok(self.finish(&doc, &fallback))
    }

    /// Parse a JSON layout and infer its outline.
    pub fn outline_str(&self, json: &str) -> Result<OutlineResult> {
        let doc = ingest::parse_layout_str(json)?;
        Ok(self.outline(&doc))
    }

    fn finish(&self, doc: &LayoutDocument, fallback: &str) -> OutlineResult {
        let analysis = OutlineExtractor::with_options(self.options.clone()).analyze(doc, fallback);
        OutlineResult {
            analysis,
            render_options: self.render_options.clone(),
        }
    }
}

/// Result of outline inference, ready for rendering.
#[derive(Debug, Clone)]
pub struct OutlineResult {
    analysis: OutlineAnalysis,
    render_options: RenderOptions,
}

impl OutlineResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.analysis.outline, format)
    }

    /// Convert to a Markdown table of contents.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.analysis.outline, &self.render_options)
    }

    /// Convert to an indented plain-text outline.
    pub fn to_text(&self) -> String {
        render::to_text(&self.analysis.outline, &self.render_options)
    }

    /// Get the outline.
    pub fn outline(&self) -> &Outline {
        &self.analysis.outline
    }

    /// Get the extraction statistics.
    pub fn stats(&self) -> &OutlineStats {
        &self.analysis.stats
    }

    /// Take the outline.
    pub fn into_outline(self) -> Outline {
        self.analysis.outline
    }
}

impl From<OutlineResult> for Outline {
    fn from(result: OutlineResult) -> Self {
        result.into_outline()
    }
}
