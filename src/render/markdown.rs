//! Markdown table-of-contents rendering.

use crate::model::{Outline, OutlineNode};

use super::RenderOptions;

/// Render an outline as a Markdown table of contents.
///
/// The title becomes a level-one heading; headings become a nested bullet
/// list following [`Outline::to_tree`].
pub fn to_markdown(outline: &Outline, options: &RenderOptions) -> String {
    let mut output = String::new();
    output.push_str("# ");
    output.push_str(&escape_markdown(&outline.title));
    output.push('\n');

    let tree = outline.to_tree();
    if !tree.items.is_empty() {
        output.push('\n');
        for node in &tree.items {
            render_node(&mut output, node, 0, options);
        }
    }

    output
}

fn render_node(output: &mut String, node: &OutlineNode, depth: usize, options: &RenderOptions) {
    output.push_str(&" ".repeat(depth * options.indent_width));
    output.push_str("- ");
    output.push_str(&escape_markdown(&node.text));
    if options.show_pages {
        output.push_str(&format!(" (p. {})", node.page));
    }
    output.push('\n');

    for child in &node.children {
        render_node(output, child, depth + 1, options);
    }
}

/// Escape characters that would change the meaning of a list item.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            _ => result.push(c),
        }
    }
    result
}
