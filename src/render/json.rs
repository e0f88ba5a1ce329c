//! JSON rendering for outlines.

use crate::error::{Error, Result};
use crate::model::{Outline, OutlineTree};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with four-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an outline to JSON.
///
/// Non-ASCII text is written as-is, not as `\u` escapes.
pub fn to_json(outline: &Outline, format: JsonFormat) -> Result<String> {
    value_to_string(outline, format)
}

/// Convert the nested view of an outline to JSON.
pub fn tree_to_json(tree: &OutlineTree, format: JsonFormat) -> Result<String> {
    value_to_string(tree, format)
}

/// Write an outline as JSON to any writer.
pub fn write_json<W: Write>(outline: &Outline, writer: W, format: JsonFormat) -> Result<()> {
    write_value(outline, writer, format)
}

fn value_to_string<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_value(value, &mut buf, format)?;
    String::from_utf8(buf).map_err(|e| Error::Render(format!("JSON output is not UTF-8: {}", e)))
}

fn write_value<T: Serialize, W: Write>(
    value: &T,
    writer: W,
    format: JsonFormat,
) -> Result<()> {
    let result = match format {
        JsonFormat::Pretty => {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(writer, formatter);
            value.serialize(&mut ser)
        }
        JsonFormat::Compact => {
            let mut ser = Serializer::new(writer);
            value.serialize(&mut ser)
        }
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, OutlineEntry};

    fn sample() -> Outline {
        let mut outline = Outline::new("Über Systeme");
        outline.push(OutlineEntry::new("第一章 概述", HeadingLevel::H1, 1, 700.0));
        outline
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.starts_with("{\n    \"title\": \"Über Systeme\""));
        assert!(json.contains("\"level\": \"H1\""));
        assert!(json.contains("第一章 概述"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"y_pos\":700.0"));
    }

    #[test]
    fn test_tree_to_json() {
        let mut outline = sample();
        outline.push(OutlineEntry::new("1.1 背景", HeadingLevel::H2, 2, 500.0));
        let json = tree_to_json(&outline.to_tree(), JsonFormat::Compact).unwrap();
        assert!(json.contains(r#""children":[{"text":"1.1 背景","level":"H2","page":2,"children":[]}]"#));
    }

    #[test]
    fn test_empty_outline_is_list() {
        let json = to_json(&Outline::new("doc.pdf"), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"title":"doc.pdf","outline":[]}"#);
    }
}
