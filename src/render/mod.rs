//! Rendering of inferred outlines.
//!
//! JSON is the persisted form; Markdown and plain text are for people.

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, tree_to_json, write_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::RenderOptions;
pub use text::to_text;
