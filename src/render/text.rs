//! Plain text rendering for outlines.

use crate::model::Outline;

use super::RenderOptions;

/// Render an outline as indented plain text.
///
/// Each heading is indented by its level, not by its position in the tree,
/// so the output can be read line by line.
pub fn to_text(outline: &Outline, options: &RenderOptions) -> String {
    let mut lines = vec![outline.title.clone()];

    for entry in &outline.outline {
        let indent = " ".repeat((entry.level.depth() as usize - 1) * options.indent_width);
        let text = entry.text.replace('\n', " ");
        if options.show_pages {
            lines.push(format!("{}{} {} ... {}", indent, entry.level, text, entry.page));
        } else {
            lines.push(format!("{}{} {}", indent, entry.level, text));
        }
    }

    lines.join("\n")
}
