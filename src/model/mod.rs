//! Data model for layout input and outline output.
//!
//! Layout types ([`Page`], [`RawTextBox`], [`CharRun`]) describe what the
//! ingestion adapter hands over. [`Outline`] is what the analysis produces.
//! Everything in between ([`MergedBlock`], candidates) lives here too so the
//! analysis stages can share it.

mod block;
mod document;
mod heading;
mod page;

pub use block::MergedBlock;
pub use document::{LayoutDocument, Outline, OutlineEntry, OutlineNode, OutlineTree};
pub use heading::{HeadingCandidate, HeadingLevel, TitleCandidate};
pub use page::{BBox, CharRun, LayoutBox, Page, RawTextBox};
