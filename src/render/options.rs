//! Rendering options for human-readable outlines.

/// Options for Markdown and plain text rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append page numbers to each heading
    pub show_pages: bool,

    /// Spaces per nesting level
    pub indent_width: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable page numbers.
    pub fn with_pages(mut self, show: bool) -> Self {
        self.show_pages = show;
        self
    }

    /// Set the indentation per level.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_pages: true,
            indent_width: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new().with_pages(false).with_indent(4);
        assert!(!options.show_pages);
        assert_eq!(options.indent_width, 4);
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(options.show_pages);
        assert_eq!(options.indent_width, 2);
    }
}
