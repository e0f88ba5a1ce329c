//! Error types for the pdfoutline library.
//!
//! The analysis core never fails; these errors come from the layers around
//! it (layout ingestion, rendering, batch processing).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading layouts or writing outlines.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout or outline JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The layout document is structurally valid JSON but unusable.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A directory was expected.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
