//! Heading level assignment from document-wide size statistics.
//!
//! Thresholds are computed once over every candidate in the document, so
//! classification can only start after all pages have been scanned.

use crate::model::{HeadingCandidate, HeadingLevel, OutlineEntry};

use super::OutlineOptions;

/// Font-size cutoffs separating heading levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeThresholds {
    /// 90th percentile of candidate sizes
    pub h1: f64,
    /// 75th percentile of candidate sizes
    pub h2: f64,
}

impl SizeThresholds {
    /// Compute thresholds over a multiset of sizes.
    ///
    /// Returns `None` for an empty slice. With a single sample both
    /// thresholds equal that sample.
    pub fn from_sizes(sizes: &[f64]) -> Option<Self> {
        if sizes.is_empty() {
            return None;
        }

        let mut sorted = sizes.to_vec();
        sorted.sort_by(f64::total_cmp);

        match (quantile_cut(&sorted, 9, 10), quantile_cut(&sorted, 3, 4)) {
            (Some(h1), Some(h2)) => Some(Self { h1, h2 }),
            _ => {
                let max = sorted[sorted.len() - 1];
                Some(Self { h1: max, h2: max })
            }
        }
    }

    /// Level for a single candidate.
    ///
    /// A candidate that is both centered and in the top third of its page is
    /// always H1, whatever its size.
    pub fn level_for(
        &self,
        candidate: &HeadingCandidate,
        options: &OutlineOptions,
    ) -> HeadingLevel {
        let positional = candidate.centered && candidate.top_third;
        if candidate.size >= self.h1 * options.h1_slack || positional {
            HeadingLevel::H1
        } else if candidate.size >= self.h2 {
            HeadingLevel::H2
        } else {
            HeadingLevel::H3
        }
    }
}

/// Cut point `i` of `k` equal-probability groups over sorted data.
///
/// Ranks are spread over the `n - 1` gaps between samples and the value is
/// linearly interpolated between the two neighbouring samples, so the
/// result always lies within the observed range. Needs at least two
/// samples.
pub fn quantile_cut(sorted: &[f64], i: usize, k: usize) -> Option<f64> {
    let n = sorted.len();
    if n < 2 || k == 0 || i == 0 || i >= k {
        return None;
    }

    let rank = i * (n - 1);
    let (j, delta) = (rank / k, rank % k);
    let k = k as f64;
    let delta = delta as f64;
    Some((sorted[j] * (k - delta) + sorted[j + 1] * delta) / k)
}

/// Assign a level to every candidate, preserving their order.
pub fn classify_headings(
    candidates: &[HeadingCandidate],
    options: &OutlineOptions,
) -> Vec<OutlineEntry> {
    let sizes: Vec<f64> = candidates.iter().map(|c| c.size).collect();
    let Some(thresholds) = SizeThresholds::from_sizes(&sizes) else {
        return Vec::new();
    };

    log::debug!(
        "Classifying {} headings (h1 >= {:.2}, h2 >= {:.2})",
        candidates.len(),
        thresholds.h1,
        thresholds.h2
    );

    candidates
        .iter()
        .map(|c| {
            let level = thresholds.level_for(c, options);
            OutlineEntry::new(c.text.clone(), level, c.page, c.y_pos)
        })
        .collect()
}
