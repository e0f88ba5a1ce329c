//! Merging of fragmented text boxes into logical blocks.
//!
//! Layout engines often split one visual paragraph into several boxes
//! (one per line, or per style change). Boxes are scanned top to bottom and
//! a box joins the current block when it sits directly below the block's
//! last box and shares its horizontal center.

use crate::model::{MergedBlock, RawTextBox};

use super::OutlineOptions;

/// Merge the boxes of one page into blocks, ordered top to bottom.
pub fn merge_boxes<'a>(boxes: &'a [RawTextBox], options: &OutlineOptions) -> Vec<MergedBlock<'a>> {
    let mut sorted: Vec<&RawTextBox> = boxes.iter().collect();
    // Stable, so boxes sharing a top edge keep their input order.
    sorted.sort_by(|a, b| b.bbox.y1.total_cmp(&a.bbox.y1));

    let mut blocks = Vec::new();
    let mut current: Option<MergedBlock<'a>> = None;

    for text_box in sorted {
        match current.as_mut() {
            Some(block) if continues_block(block.last(), text_box, options) => {
                block.push(text_box);
            }
            _ => {
                if let Some(done) = current.replace(MergedBlock::new(text_box)) {
                    blocks.push(done);
                }
            }
        }
    }

    if let Some(done) = current {
        blocks.push(done);
    }

    log::debug!("Merged {} boxes into {} blocks", boxes.len(), blocks.len());
    blocks
}

/// Whether `next` continues the paragraph ending in `last`.
pub fn continues_block(last: &RawTextBox, next: &RawTextBox, options: &OutlineOptions) -> bool {
    let vertical_close = (last.bbox.bottom() - next.bbox.top()).abs() < options.merge_vertical_gap;
    let horizontal_align =
        (last.bbox.center_x() - next.bbox.center_x()).abs() < options.merge_horizontal_tolerance;
    vertical_close && horizontal_align
}
