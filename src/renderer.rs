//! Tree rendering functionality.
//!
//! Draws a [`Node`] hierarchy back out as an ASCII tree, used for previews
//! and as the structural inverse of the parser in tests. This is purely
//! mechanical: the last child of each directory gets the terminal branch
//! glyph and its descendants drop the continuing vertical bar.

use crate::model::Node;

/// Renders the hierarchy as a branch-drawn tree string.
///
/// With `ascii_only` the plain `|--`/`` `-- `` glyphs are used instead of
/// Unicode box-drawing characters. Directories carry a trailing `/`.
pub fn render(root: &Node, ascii_only: bool) -> String {
    let mut output = String::new();
    output.push_str(&root.name);
    if root.is_directory() {
        output.push('/');
    }
    output.push('\n');

    for (index, child) in root.children.iter().enumerate() {
        let is_last = index == root.children.len() - 1;
        render_node(child, &mut output, "", is_last, ascii_only);
    }

    output
}

fn render_node(node: &Node, output: &mut String, prefix: &str, is_last: bool, ascii_only: bool) {
    let branch = match (ascii_only, is_last) {
        (false, false) => "├── ",
        (false, true) => "└── ",
        (true, false) => "|-- ",
        (true, true) => "`-- ",
    };
    let extension = match (ascii_only, is_last) {
        (false, false) => "│   ",
        (true, false) => "|   ",
        (_, true) => "    ",
    };

    output.push_str(prefix);
    output.push_str(branch);
    output.push_str(&node.name);
    if node.is_directory() {
        output.push('/');
    }
    output.push('\n');

    let child_prefix = format!("{}{}", prefix, extension);

    for (index, child) in node.children.iter().enumerate() {
        let child_is_last = index == node.children.len() - 1;
        render_node(child, output, &child_prefix, child_is_last, ascii_only);
    }
}
