//! Title and heading candidate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading level in the inferred outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Numeric depth (1-3).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Label as it appears in serialized outlines.
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A merged block that passed the heading filter and the size floor.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCandidate {
    /// Trimmed block text
    pub text: String,
    /// Average font size over non-whitespace characters
    pub size: f64,
    /// Whether any character uses a bold font
    pub bold: bool,
    /// Page number (1-indexed)
    pub page: u32,
    /// Top edge of the block
    pub y_pos: f64,
    /// Horizontally centered on the reference center
    pub centered: bool,
    /// Top edge lies in the upper third of the page
    pub top_third: bool,
}

/// Best-so-far title candidate.
///
/// Starts from a caller-supplied fallback with score zero; only a strictly
/// greater score replaces the current text, so ties keep the earlier block.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate {
    /// Candidate text
    pub text: String,
    /// Candidate score
    pub score: f64,
}

impl TitleCandidate {
    /// Create the initial candidate from a fallback title.
    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: 0.0,
        }
    }

    /// Offer a scored block; returns true if it became the new best.
    pub fn offer(&mut self, text: &str, score: f64) -> bool {
        if score > self.score {
            self.text = text.to_string();
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Whether any block has replaced the fallback.
    pub fn is_fallback(&self) -> bool {
        self.score <= 0.0
    }

    /// Consume the candidate and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
