//! Integration tests for directory processing.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use pdfoutline::batch::{process_directory, process_directory_with_progress, BatchOptions};
use pdfoutline::{Error, JsonFormat, Outline, OutlineOptions};

const REPORT: &str = r#"{
    "source": "q3-report.pdf",
    "pages": [{
        "height": 792.0,
        "boxes": [
            {"x0": 150, "y0": 700, "x1": 450, "y1": 724,
             "runs": [{"text": "Quarterly Report On Regional Sales", "size": 24, "font": "Arial-Bold"}]},
            {"x0": 72, "y0": 500, "x1": 300, "y1": 516,
             "runs": [{"text": "1. Highlights", "size": 16, "font": "Arial-Bold"}]}
        ]
    }]
}"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read_outline(path: &Path) -> Outline {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_one_outline_per_layout() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "report.json", REPORT);
    write(input.path(), "blank.json", r#"{"pages": [{"boxes": []}]}"#);
    write(input.path(), "notes.txt", "not a layout");

    let report = process_directory(
        input.path(),
        output.path(),
        &OutlineOptions::default(),
        &BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.is_success());
    // Sorted by input name.
    assert!(report.items[0].input.ends_with("blank.json"));
    assert!(report.items[1].input.ends_with("report.json"));

    let outline = read_outline(&output.path().join("report.json"));
    assert_eq!(outline.title, "Quarterly Report On Regional Sales");
    assert_eq!(outline.outline.len(), 2);

    let blank = read_outline(&output.path().join("blank.json"));
    assert_eq!(blank.title, "blank.json");
    assert!(blank.outline.is_empty());

    assert!(!output.path().join("notes.json").exists());
}

#[test]
fn test_failure_does_not_stop_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write(input.path(), "a.json", REPORT);
    write(input.path(), "b.json", "{ broken");
    write(input.path(), "c.json", REPORT);

    let report = process_directory(
        input.path(),
        output.path(),
        &OutlineOptions::default(),
        &BatchOptions::new().sequential(),
    )
    .unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(report.succeeded(), 2);
    assert!(!report.is_success());

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].0.ends_with("b.json"));
    assert!(matches!(failures[0].1, Error::Json(_)));

    assert!(output.path().join("a.json").exists());
    assert!(!output.path().join("b.json").exists());
    assert!(output.path().join("c.json").exists());
}

#[test]
fn test_creates_output_directory_and_reports_progress() {
    let input = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("nested").join("outlines");
    for name in ["one.layout", "two.layout", "three.LAYOUT"] {
        write(input.path(), name, REPORT);
    }

    let seen = AtomicUsize::new(0);
    let report = process_directory_with_progress(
        input.path(),
        &output,
        &OutlineOptions::default(),
        &BatchOptions::new()
            .with_extension("layout")
            .with_format(JsonFormat::Compact),
        |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        },
    )
    .unwrap();

    assert_eq!(report.succeeded(), 3);
    assert_eq!(seen.load(Ordering::SeqCst), 3);

    let json = fs::read_to_string(output.join("two.json")).unwrap();
    assert!(json.starts_with(r#"{"title":"Quarterly Report On Regional Sales","outline":["#));
}

#[test]
fn test_missing_input_directory() {
    let output = tempfile::tempdir().unwrap();
    let result = process_directory(
        &output.path().join("missing"),
        output.path(),
        &OutlineOptions::default(),
        &BatchOptions::default(),
    );
    assert!(matches!(result, Err(Error::NotADirectory(_))));
}

#[test]
fn test_refuses_to_overwrite_inputs() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "report.json", REPORT);

    let result = process_directory(
        dir.path(),
        dir.path(),
        &OutlineOptions::default(),
        &BatchOptions::default(),
    );
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(dir.path().join("report.json")).unwrap(), REPORT);
}

#[test]
fn test_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let report = process_directory(
        input.path(),
        output.path(),
        &OutlineOptions::default(),
        &BatchOptions::default(),
    )
    .unwrap();
    assert!(report.is_empty());
    assert!(report.is_success());
}
