//! Typographic features of a block.

use crate::model::LayoutBox;

/// Average glyph size and boldness of a block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextFeatures {
    /// Mean font size over non-whitespace characters (0 if there are none)
    pub avg_size: f64,
    /// Whether any non-whitespace character uses a bold font
    pub bold: bool,
}

/// Compute the features of a raw box or merged block.
///
/// Whitespace characters do not count toward either feature.
pub fn text_features<B: LayoutBox + ?Sized>(block: &B) -> TextFeatures {
    let mut total = 0.0;
    let mut count = 0usize;
    let mut bold = false;

    for run in block.runs() {
        let glyphs = run.text.chars().filter(|c| !c.is_whitespace()).count();
        if glyphs == 0 {
            continue;
        }
        total += run.size * glyphs as f64;
        count += glyphs;
        bold |= run.is_bold();
    }

    if count == 0 {
        return TextFeatures::default();
    }

    TextFeatures {
        avg_size: total / count as f64,
        bold,
    }
}
