//! Tunable heuristics for outline inference.
//!
//! The defaults were tuned against a reference corpus of reports and forms;
//! none of them is a principled cutoff.

/// Options controlling block merging, title scoring, and heading detection.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineOptions {
    /// Maximum gap between one box's bottom and the next box's top for the
    /// two to merge (strict)
    pub merge_vertical_gap: f64,

    /// Maximum horizontal center distance for two boxes to merge (strict)
    pub merge_horizontal_tolerance: f64,

    /// X coordinate treated as the page center
    pub center_reference_x: f64,

    /// Maximum distance from `center_reference_x` to count as centered (strict)
    pub center_tolerance: f64,

    /// Page height used when the adapter reports none
    pub fallback_page_height: f64,

    /// Title candidates need more than this many words
    pub title_min_words: usize,

    /// Title candidates need fewer than this many words
    pub title_max_words: usize,

    /// Title score bonus for bold text
    pub bold_weight: f64,

    /// Title score bonus for centered text
    pub centered_weight: f64,

    /// Title score bonus for text in the top third of the page
    pub top_third_weight: f64,

    /// Headings may have at most this many words
    pub heading_max_words: usize,

    /// Headings may have at most this many characters
    pub heading_max_chars: usize,

    /// Headings need an average font size strictly above this
    pub heading_size_floor: f64,

    /// Multiplier applied to the H1 size threshold
    pub h1_slack: f64,
}

impl OutlineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the merge tolerances.
    pub fn with_merge_tolerances(mut self, vertical_gap: f64, horizontal: f64) -> Self {
        self.merge_vertical_gap = vertical_gap;
        self.merge_horizontal_tolerance = horizontal;
        self
    }

    /// Set the page-center reference and tolerance.
    pub fn with_center(mut self, reference_x: f64, tolerance: f64) -> Self {
        self.center_reference_x = reference_x;
        self.center_tolerance = tolerance;
        self
    }

    /// Set the fallback page height.
    pub fn with_fallback_page_height(mut self, height: f64) -> Self {
        self.fallback_page_height = height;
        self
    }

    /// Set the exclusive word-count bounds for title candidates.
    pub fn with_title_words(mut self, min: usize, max: usize) -> Self {
        self.title_min_words = min;
        self.title_max_words = max;
        self
    }

    /// Set the title score weights.
    pub fn with_title_weights(mut self, bold: f64, centered: f64, top_third: f64) -> Self {
        self.bold_weight = bold;
        self.centered_weight = centered;
        self.top_third_weight = top_third;
        self
    }

    /// Set the heading font-size floor.
    pub fn with_size_floor(mut self, floor: f64) -> Self {
        self.heading_size_floor = floor;
        self
    }

    /// Set the H1 threshold slack factor.
    pub fn with_h1_slack(mut self, slack: f64) -> Self {
        self.h1_slack = slack;
        self
    }

    /// Whether a block is horizontally centered.
    pub fn is_centered(&self, center_x: f64) -> bool {
        (center_x - self.center_reference_x).abs() < self.center_tolerance
    }

    /// Whether a top edge lies in the upper third of a page.
    pub fn is_top_third(&self, top: f64, page_height: f64) -> bool {
        top > 2.0 * page_height / 3.0
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            merge_vertical_gap: 5.0,
            merge_horizontal_tolerance: 10.0,
            center_reference_x: 300.0,
            center_tolerance: 100.0,
            fallback_page_height: 1000.0,
            title_min_words: 3,
            title_max_words: 15,
            bold_weight: 5.0,
            centered_weight: 3.0,
            top_third_weight: 2.0,
            heading_max_words: 20,
            heading_max_chars: 150,
            heading_size_floor: 11.0,
            h1_slack: 0.99,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = OutlineOptions::default();
        assert_eq!(options.merge_vertical_gap, 5.0);
        assert_eq!(options.center_reference_x, 300.0);
        assert_eq!(options.heading_size_floor, 11.0);
        assert_eq!(options.h1_slack, 0.99);
    }

    #[test]
    fn test_options_builder() {
        let options = OutlineOptions::new()
            .with_center(306.0, 80.0)
            .with_size_floor(10.0)
            .with_title_weights(4.0, 2.0, 1.0);

        assert_eq!(options.center_reference_x, 306.0);
        assert_eq!(options.center_tolerance, 80.0);
        assert_eq!(options.heading_size_floor, 10.0);
        assert_eq!(options.bold_weight, 4.0);
    }

    #[test]
    fn test_position_predicates() {
        let options = OutlineOptions::default();
        assert!(options.is_centered(300.0));
        assert!(options.is_centered(399.9));
        assert!(!options.is_centered(400.0));
        assert!(!options.is_centered(150.0));

        assert!(options.is_top_third(950.0, 1000.0));
        assert!(!options.is_top_third(600.0, 1000.0));
    }
}
