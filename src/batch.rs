//! Directory-level processing: one layout file in, one outline file out.
//!
//! Documents share no state, so they are processed in parallel with Rayon
//! unless [`BatchOptions::sequential`] is set. A failing document is logged
//! and reported; it does not stop the others.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::{OutlineExtractor, OutlineOptions};
use crate::error::{Error, Result};
use crate::ingest::{default_title, load_layout_file};
use crate::render::{write_json, JsonFormat};

/// Options for batch processing.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Whether to use parallel processing
    pub parallel: bool,

    /// Extension of input files (lowercase, without the dot)
    pub extension: String,

    /// Output JSON format
    pub format: JsonFormat,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the input file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_lowercase();
        self
    }

    /// Set the output JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            extension: "json".to_string(),
            format: JsonFormat::Pretty,
        }
    }
}

/// A successfully processed document.
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    /// Where the outline was written
    pub output: PathBuf,
    /// Inferred title
    pub title: String,
    /// Number of headings found
    pub heading_count: usize,
}

/// Result for one input file.
#[derive(Debug)]
pub struct BatchItem {
    /// The layout file
    pub input: PathBuf,
    /// What happened to it
    pub result: Result<FileOutcome>,
}

/// Results of a batch run, in input-name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-file results
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// Number of files processed successfully.
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.result.is_ok()).count()
    }

    /// Files that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &Error)> {
        self.items
            .iter()
            .filter_map(|i| i.result.as_ref().err().map(|e| (i.input.as_path(), e)))
    }

    /// Whether every file succeeded.
    pub fn is_success(&self) -> bool {
        self.items.iter().all(|i| i.result.is_ok())
    }

    /// Number of files attempted.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no input files were found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// List input files in a directory, sorted by name.
pub fn list_inputs(input_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::NotADirectory(input_dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Output path for an input file: `<output_dir>/<stem>.json`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".json");
    output_dir.join(name)
}

/// Infer and write the outline of a single layout file.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    extractor: &OutlineExtractor,
    format: JsonFormat,
) -> Result<FileOutcome> {
    log::info!("Processing {}...", input.display());

    let doc = load_layout_file(input)?;
    let title = default_title(&doc, input);
    let outline = extractor.extract(&doc, &title);

    let output = output_path(input, output_dir);
    let mut writer = BufWriter::new(fs::File::create(&output)?);
    write_json(&outline, &mut writer, format)?;
    writer.flush()?;

    Ok(FileOutcome {
        output,
        title: outline.title,
        heading_count: outline.outline.len(),
    })
}

/// Process every layout file in `input_dir`, writing outlines to `output_dir`.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
    batch: &BatchOptions,
) -> Result<BatchReport> {
    process_directory_with_progress(input_dir, output_dir, options, batch, |_| {})
}

/// Like [`process_directory`], calling `on_item` as each file finishes.
///
/// With parallel processing enabled `on_item` runs on worker threads and
/// in completion order.
pub fn process_directory_with_progress<F>(
    input_dir: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
    batch: &BatchOptions,
    on_item: F,
) -> Result<BatchReport>
where
    F: Fn(&BatchItem) + Sync,
{
    let inputs = list_inputs(input_dir, &batch.extension)?;
    fs::create_dir_all(output_dir)?;
    if batch.extension == "json"
        && fs::canonicalize(input_dir)? == fs::canonicalize(output_dir)?
    {
        return Err(Error::Other(
            "output directory must differ from the input directory".to_string(),
        ));
    }

    let extractor = OutlineExtractor::with_options(options.clone());
    let run = |input: PathBuf| {
        let result = process_file(&input, output_dir, &extractor, batch.format);
        if let Err(ref e) = result {
            log::warn!("Failed to process {}: {}", input.display(), e);
        }
        let item = BatchItem { input, result };
        on_item(&item);
        item
    };

    let items: Vec<BatchItem> = if batch.parallel {
        inputs.into_par_iter().map(run).collect()
    } else {
        inputs.into_iter().map(run).collect()
    };

    let report = BatchReport { items };
    log::info!(
        "Processed {} of {} documents",
        report.succeeded(),
        report.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_options_builder() {
        let options = BatchOptions::new()
            .sequential()
            .with_extension(".LAYOUT")
            .with_format(JsonFormat::Compact);

        assert!(!options.parallel);
        assert_eq!(options.extension, "layout");
        assert_eq!(options.format, JsonFormat::Compact);
    }

    #[test]
    fn test_default_batch_options() {
        let options = BatchOptions::default();
        assert!(options.parallel);
        assert_eq!(options.extension, "json");
        assert_eq!(options.format, JsonFormat::Pretty);
    }

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("in/annual report.json"), Path::new("out"));
        assert_eq!(path, PathBuf::from("out/annual report.json"));

        let path = output_path(Path::new("in/v1.2.layout"), Path::new("out"));
        assert_eq!(path, PathBuf::from("out/v1.2.json"));
    }

    #[test]
    fn test_list_inputs_not_a_directory() {
        let err = list_inputs(Path::new("definitely/missing/dir"), "json").unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }
}
