//! pdfoutline CLI - document outline inference tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::batch::{self, BatchOptions};
use pdfoutline::{HeadingLevel, JsonFormat, OutlineOptions, PdfOutline, RenderOptions};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(about = "Infer document titles and heading outlines from PDF page layout", long_about = None)]
struct Cli {
    /// Directory of layout files
    #[arg(value_name = "INPUT_DIR")]
    input: Option<PathBuf>,

    /// Directory for outline files
    #[arg(value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    #[command(flatten)]
    tuning: Tuning,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Heuristic settings shared by every command.
#[derive(Args)]
struct Tuning {
    /// Minimum average font size for headings (exclusive)
    #[arg(long, global = true, env = "PDFOUTLINE_SIZE_FLOOR", value_name = "PT")]
    size_floor: Option<f64>,

    /// Horizontal reference for centered text
    #[arg(long, global = true, env = "PDFOUTLINE_CENTER_X", value_name = "X")]
    center_x: Option<f64>,

    /// Process documents one at a time
    #[arg(long, global = true, env = "PDFOUTLINE_SEQUENTIAL")]
    sequential: bool,
}

impl Tuning {
    fn options(&self) -> OutlineOptions {
        let mut options = OutlineOptions::default();
        if let Some(floor) = self.size_floor {
            options = options.with_size_floor(floor);
        }
        if let Some(x) = self.center_x {
            let tolerance = options.center_tolerance;
            options = options.with_center(x, tolerance);
        }
        options
    }

    fn builder(&self, title: Option<String>) -> PdfOutline {
        let builder = PdfOutline::new().with_options(self.options());
        match title {
            Some(title) => builder.with_title(title),
            None => builder,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the outline of a layout file as JSON
    Outline {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Title to use when none is found on the first page
        #[arg(long, value_name = "STR")]
        title: Option<String>,
    },

    /// Render the outline as a Markdown table of contents
    #[command(alias = "md")]
    Markdown {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit page references
        #[arg(long)]
        no_pages: bool,
    },

    /// Render the outline as indented plain text
    Text {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show outline statistics for a layout file
    Info {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Infer outlines for every layout file in a directory
    Batch {
        /// Directory of layout files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory for outline files
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Extension of layout files
        #[arg(long, default_value = "json")]
        extension: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let tuning = &cli.tuning;

    let result = match cli.command {
        Some(Commands::Outline {
            ref input,
            ref output,
            compact,
            ref title,
        }) => cmd_outline(tuning, input, output.as_deref(), compact, title.clone()),
        Some(Commands::Markdown {
            ref input,
            ref output,
            no_pages,
        }) => cmd_markdown(tuning, input, output.as_deref(), !no_pages),
        Some(Commands::Text {
            ref input,
            ref output,
        }) => cmd_text(tuning, input, output.as_deref()),
        Some(Commands::Info { ref input }) => cmd_info(tuning, input),
        Some(Commands::Batch {
            ref input,
            ref output,
            ref extension,
            compact,
        }) => cmd_batch(tuning, input, output, extension, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (&cli.input, &cli.output) {
            (Some(input), Some(output)) => cmd_batch(tuning, input, output, "json", false),
            _ => {
                println!("{}", "Usage: pdfoutline <INPUT_DIR> <OUTPUT_DIR>".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_outline(
    tuning: &Tuning,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    title: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = tuning.builder(title).outline_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    write_or_print(&result.to_json(format)?, output)
}

fn cmd_markdown(
    tuning: &Tuning,
    input: &Path,
    output: Option<&Path>,
    show_pages: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = tuning
        .builder(None)
        .with_render_options(RenderOptions::new().with_pages(show_pages))
        .outline_file(input)?;

    write_or_print(&result.to_markdown(), output)
}

fn cmd_text(
    tuning: &Tuning,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = tuning.builder(None).outline_file(input)?;
    write_or_print(&result.to_text(), output)
}

fn cmd_info(tuning: &Tuning, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = tuning.builder(None).outline_file(input)?;
    let outline = result.outline();
    let stats = result.stats();

    println!("{}", "Outline Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}{}",
        "Title".bold(),
        outline.title,
        if stats.title_is_fallback {
            " (fallback)".dimmed().to_string()
        } else {
            String::new()
        }
    );
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Text boxes".bold(), stats.box_count);
    println!("{}: {}", "Blocks".bold(), stats.block_count);

    println!();
    println!("{}", "Headings".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
        println!("{}: {}", level.as_str().bold(), outline.headings_at(level).count());
    }
    if let Some(thresholds) = stats.thresholds {
        println!(
            "{}: H1 >= {:.2}, H2 >= {:.2}",
            "Thresholds".bold(),
            thresholds.h1,
            thresholds.h2
        );
    }

    Ok(())
}

fn cmd_batch(
    tuning: &Tuning,
    input: &Path,
    output: &Path,
    extension: &str,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch_options = BatchOptions::new()
        .with_parallel(!tuning.sequential)
        .with_extension(extension)
        .with_format(if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        });

    let total = batch::list_inputs(input, &batch_options.extension)?.len();
    if total == 0 {
        println!(
            "{} no .{} files in {}",
            "Nothing to do:".yellow(),
            batch_options.extension,
            input.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = batch::process_directory_with_progress(
        input,
        output,
        &tuning.options(),
        &batch_options,
        |item| {
            if let Some(name) = item.input.file_name() {
                pb.set_message(name.to_string_lossy().into_owned());
            }
            pb.inc(1);
        },
    )?;

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} documents -> {}",
        "Processed".green().bold(),
        report.succeeded(),
        report.len(),
        output.display()
    );
    for (path, err) in report.failures() {
        println!("  {} {}: {}", "✗".red(), path.display(), err);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} documents failed", report.len() - report.succeeded()).into())
    }
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document title and heading outline inference");
    println!();
    println!("License: MIT");
}
