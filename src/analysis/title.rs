//! Title selection from the first page.

use crate::model::{LayoutBox, MergedBlock, TitleCandidate};

use super::features::text_features;
use super::OutlineOptions;

/// Score a first-page block as a potential title.
///
/// Returns `None` when the block is not eligible (empty, or a word count
/// outside the configured exclusive bounds).
pub fn title_score(
    block: &MergedBlock<'_>,
    page_height: f64,
    options: &OutlineOptions,
) -> Option<f64> {
    let text = block.as_str().trim();
    let words = text.split_whitespace().count();
    if text.is_empty() || words <= options.title_min_words || words >= options.title_max_words {
        return None;
    }

    let features = text_features(block);
    let bbox = block.bbox();

    let mut score = features.avg_size;
    if features.bold {
        score += options.bold_weight;
    }
    if options.is_centered(bbox.center_x()) {
        score += options.centered_weight;
    }
    if options.is_top_third(bbox.top(), page_height) {
        score += options.top_third_weight;
    }
    Some(score)
}

/// Pick the highest-scoring block, falling back to `default_title`.
///
/// Blocks are scanned in order and only a strictly greater score replaces
/// the current best, so the earliest block wins ties.
pub fn select_title(
    blocks: &[MergedBlock<'_>],
    page_height: f64,
    default_title: &str,
    options: &OutlineOptions,
) -> TitleCandidate {
    let mut best = TitleCandidate::fallback(default_title);

    for block in blocks {
        if let Some(score) = title_score(block, page_height, options) {
            best.offer(block.as_str().trim(), score);
        }
    }

    if best.is_fallback() {
        log::debug!("No title candidate qualified, using {:?}", best.text);
    } else {
        log::debug!("Selected title {:?} (score {:.2})", best.text, best.score);
    }
    best
}
