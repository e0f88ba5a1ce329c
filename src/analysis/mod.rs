//! Outline inference from page layout.
//!
//! The pipeline per document:
//!
//! 1. every page's boxes are merged into blocks ([`merge_boxes`]);
//! 2. first-page blocks are scored as title candidates ([`select_title`]);
//! 3. blocks on all pages that look like headings and are large enough
//!    become [`HeadingCandidate`]s;
//! 4. candidates are leveled against document-wide size thresholds
//!    ([`classify_headings`]).
//!
//! Nothing here fails: missing data degrades to fallbacks (page height,
//! title) or an empty outline.

mod classify;
mod features;
mod filter;
mod merge;
mod options;
mod title;

pub use classify::{classify_headings, quantile_cut, SizeThresholds};
pub use features::{text_features, TextFeatures};
pub use filter::{
    has_cased_letters, is_cjk_ideograph, is_likely_heading, is_title_case, is_upper_case,
};
pub use merge::{continues_block, merge_boxes};
pub use options::OutlineOptions;
pub use title::{select_title, title_score};

use crate::model::{
    HeadingCandidate, LayoutBox, LayoutDocument, MergedBlock, Outline, TitleCandidate,
};

/// Counters gathered while extracting an outline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutlineStats {
    /// Pages scanned
    pub page_count: u32,
    /// Raw text boxes seen
    pub box_count: usize,
    /// Blocks after merging
    pub block_count: usize,
    /// Blocks that became heading candidates
    pub candidate_count: usize,
    /// Size thresholds, if there was at least one candidate
    pub thresholds: Option<SizeThresholds>,
    /// Whether the title came from the fallback
    pub title_is_fallback: bool,
}

/// An outline together with the statistics that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineAnalysis {
    /// The inferred outline
    pub outline: Outline,
    /// Extraction statistics
    pub stats: OutlineStats,
}

/// Infers titles and heading outlines from layout documents.
///
/// # Example
///
/// ```
/// use pdfoutline::analysis::OutlineExtractor;
/// use pdfoutline::model::{BBox, LayoutDocument, Page, RawTextBox};
///
/// let page = Page::new(792.0).with_box(RawTextBox::single(
///     BBox::new(72.0, 700.0, 400.0, 720.0),
///     "1. Introduction",
///     16.0,
///     "Helvetica-Bold",
/// ));
/// let doc = LayoutDocument::from_pages(vec![page]);
///
/// let outline = OutlineExtractor::new().extract(&doc, "paper.pdf");
/// assert_eq!(outline.title, "paper.pdf");
/// assert_eq!(outline.outline[0].text, "1. Introduction");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    options: OutlineOptions,
}

impl OutlineExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Infer the outline of a document.
    ///
    /// `default_title` is used when no first-page block qualifies as title.
    pub fn extract(&self, doc: &LayoutDocument, default_title: &str) -> Outline {
        self.analyze(doc, default_title).outline
    }

    /// Infer the outline and report statistics.
    pub fn analyze(&self, doc: &LayoutDocument, default_title: &str) -> OutlineAnalysis {
        let mut stats = OutlineStats {
            page_count: doc.page_count(),
            ..Default::default()
        };
        let mut title = None;
        let mut candidates = Vec::new();

        for (index, page) in doc.pages.iter().enumerate() {
            let page_num = index as u32 + 1;
            let page_height = page.height_or(self.options.fallback_page_height);
            let blocks = merge_boxes(&page.boxes, &self.options);
            stats.box_count += page.boxes.len();
            stats.block_count += blocks.len();

            if index == 0 {
                title = Some(select_title(&blocks, page_height, default_title, &self.options));
            }

            candidates.extend(
                blocks
                    .iter()
                    .filter_map(|block| self.heading_candidate(block, page_num, page_height)),
            );
        }

        let title = title.unwrap_or_else(|| TitleCandidate::fallback(default_title));
        stats.title_is_fallback = title.is_fallback();
        stats.candidate_count = candidates.len();
        stats.thresholds =
            SizeThresholds::from_sizes(&candidates.iter().map(|c| c.size).collect::<Vec<_>>());

        let mut outline = Outline::new(title.into_text());
        outline.outline = classify_headings(&candidates, &self.options);

        log::debug!(
            "Outline: {} pages, {} blocks, {} headings",
            stats.page_count,
            stats.block_count,
            outline.len()
        );

        OutlineAnalysis { outline, stats }
    }

    /// Turn a block into a heading candidate if it passes the shape filter
    /// and the size floor.
    pub fn heading_candidate(
        &self,
        block: &MergedBlock<'_>,
        page: u32,
        page_height: f64,
    ) -> Option<HeadingCandidate> {
        let text = block.as_str().trim();
        if !is_likely_heading(text, &self.options) {
            return None;
        }

        let features = text_features(block);
        if features.avg_size <= self.options.heading_size_floor {
            return None;
        }

        let bbox = block.bbox();
        Some(HeadingCandidate {
            text: text.to_string(),
            size: features.avg_size,
            bold: features.bold,
            page,
            y_pos: bbox.top(),
            centered: self.options.is_centered(bbox.center_x()),
            top_third: self.options.is_top_third(bbox.top(), page_height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, HeadingLevel, Page, RawTextBox};

    fn text_box(text: &str, size: f64, x0: f64, y1: f64) -> RawTextBox {
        RawTextBox::single(BBox::new(x0, y1 - size, x0 + 150.0, y1), text, size, "Times")
    }

    #[test]
    fn test_empty_document() {
        let analysis = OutlineExtractor::new().analyze(&LayoutDocument::new(), "empty.pdf");
        assert_eq!(analysis.outline.title, "empty.pdf");
        assert!(analysis.outline.is_empty());
        assert!(analysis.stats.title_is_fallback);
        assert!(analysis.stats.thresholds.is_none());
    }

    #[test]
    fn test_size_floor_is_strict() {
        let extractor = OutlineExtractor::new();
        let page = Page::new(792.0)
            .with_box(text_box("Exactly Eleven", 11.0, 72.0, 700.0))
            .with_box(text_box("Just Above", 11.5, 72.0, 600.0));
        let doc = LayoutDocument::from_pages(vec![page]);

        let outline = extractor.extract(&doc, "doc.pdf");
        assert_eq!(outline.len(), 1);
        assert_eq!(outline.outline[0].text, "Just Above");
    }

    #[test]
    fn test_title_only_from_first_page() {
        let extractor = OutlineExtractor::new();
        let first =
            Page::new(792.0).with_box(text_box("body text on the cover", 10.0, 72.0, 300.0));
        let second = Page::new(792.0)
            .with_box(text_box("A Much Larger Candidate Title", 30.0, 225.0, 700.0));
        let doc = LayoutDocument::from_pages(vec![first, second]);

        let analysis = extractor.analyze(&doc, "doc.pdf");
        assert_eq!(analysis.outline.title, "body text on the cover");
        assert_eq!(analysis.outline.outline[0].page, 2);
        assert_eq!(analysis.outline.outline[0].level, HeadingLevel::H1);
    }

    #[test]
    fn test_missing_page_height_uses_fallback() {
        let extractor = OutlineExtractor::new();
        // Centered (center x = 300); top third only against the 1000 fallback.
        let mut page = Page::default();
        page.add_box(text_box("Overview", 12.0, 225.0, 700.0));
        let candidate = {
            let blocks = merge_boxes(&page.boxes, extractor.options());
            let height = page.height_or(extractor.options().fallback_page_height);
            extractor.heading_candidate(&blocks[0], 1, height)
        };

        let candidate = candidate.expect("heading candidate");
        assert!(candidate.centered);
        assert!(candidate.top_third);
    }

    #[test]
    fn test_stats_counts() {
        let extractor = OutlineExtractor::new();
        let page = Page::new(792.0)
            .with_box(text_box("Results", 16.0, 72.0, 700.0))
            .with_box(text_box("part of", 10.0, 72.0, 682.0))
            .with_box(text_box("Discussion", 16.0, 72.0, 400.0));
        let doc = LayoutDocument::from_pages(vec![page]);

        let stats = extractor.analyze(&doc, "doc.pdf").stats;
        assert_eq!(stats.page_count, 1);
        assert_eq!(stats.box_count, 3);
        assert_eq!(stats.block_count, 2);
        assert_eq!(stats.candidate_count, 1);
    }
}
