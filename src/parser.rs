//! Markdown tree parsing functionality.
//!
//! Recovers a [`Node`] hierarchy from ASCII trees drawn inside a text
//! document. Documents are human-authored: trees may sit inside fenced code
//! blocks or directly in prose, glyphs may be Unicode box-drawing characters
//! or their ASCII equivalents, and indentation is not guaranteed to be
//! consistent. Line selection, indent measurement and the
//! extension-implies-file classification are heuristics; malformed lines are
//! skipped rather than failing the whole parse.

use crate::error::{Error, Result};
use crate::model::Node;
use crate::validators;
use log::{debug, warn};
use std::path::Path;

const FENCE_MARKER: &str = "```";

/// Leading characters that contribute to a line's indentation width.
/// Covers plain spaces/tabs as well as box-drawing prefixes in both their
/// Unicode and ASCII forms.
const INDENT_CHARS: [char; 11] =
    [' ', '\t', '|', '├', '└', '─', '│', '-', '`', '/', '\\'];

/// Branch-drawing tokens stripped during name extraction, long forms before
/// short ones so multi-character tokens are not consumed piecemeal.
const BRANCH_TOKENS: [&str; 11] =
    ["├──", "└──", "|--", "`--", "├─", "└─", "├", "└", "─", "│", "|"];

struct LineInfo {
    indent_level: usize,
    name: String,
    is_directory: bool,
}

/// Parses a markdown file into a hierarchy rooted at a directory named
/// `"root"`.
///
/// # Errors
/// * `Error::FileNotFound` / `Error::PermissionDenied` if the file cannot
///   be read
/// * `Error::InvalidMarkdownFormat` if the document contains no tree
pub fn parse_file(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    validators::validate_file_readable(path)?;

    if !validators::has_markdown_extension(path) {
        debug!("'{}' has no markdown extension, parsing anyway", path.display());
    }

    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse(&content)
}

/// Parses a document into a hierarchy rooted at a directory named `"root"`.
///
/// The document may mix prose with one or more tree regions, optionally
/// fenced. Once at least one tree-like line is found, parsing always
/// succeeds; individual malformed lines degrade gracefully.
///
/// # Errors
/// * `Error::InvalidMarkdownFormat` if no tree-like line exists anywhere
pub fn parse(document: &str) -> Result<Node> {
    debug!("Parsing markdown structure");

    let mut in_code_block = false;
    let mut tree_lines = Vec::new();

    for line in document.lines() {
        // Fence lines toggle the block state and are never part of the tree.
        if line.contains(FENCE_MARKER) {
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block || is_tree_line(line) {
            tree_lines.push(line);
        }
    }

    if tree_lines.is_empty() {
        return Err(Error::InvalidMarkdownFormat(
            "no tree structure found in document".to_string(),
        ));
    }

    Ok(parse_tree_lines(&tree_lines))
}

/// Assembles selected lines into a tree using a stack of open directories.
///
/// The stack owns the nodes being built; popping an entry attaches it to the
/// new stack top. Indentation must strictly increase down a path, so a line
/// at the same or a shallower level returns to an ancestor.
fn parse_tree_lines(lines: &[&str]) -> Node {
    let mut stack: Vec<(isize, Node)> = vec![(-1, Node::directory("root"))];

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let Some(info) = parse_line(line) else {
            continue;
        };
        let level = info.indent_level as isize;

        while stack.len() > 1 && stack.last().is_some_and(|(top, _)| *top >= level) {
            let Some((_, finished)) = stack.pop() else {
                break;
            };
            if let Some((_, parent)) = stack.last_mut() {
                parent.add_child(finished);
            }
        }

        if stack.last().is_some_and(|(top, _)| *top >= level) {
            warn!("Invalid tree structure: no parent found for '{}'", info.name);
            continue;
        }

        let node = if info.is_directory {
            Node::directory(info.name)
        } else {
            Node::file(info.name)
        };
        stack.push((level, node));
    }

    // Attach everything still open back up to the root.
    while stack.len() > 1 {
        let Some((_, finished)) = stack.pop() else {
            break;
        };
        if let Some((_, parent)) = stack.last_mut() {
            parent.add_child(finished);
        }
    }

    match stack.pop() {
        Some((_, root)) => root,
        None => Node::directory("root"),
    }
}

fn parse_line(line: &str) -> Option<LineInfo> {
    let indent_level = indent_level(line);
    let (name, is_directory) = extract_name(line)?;

    Some(LineInfo { indent_level, name, is_directory })
}

/// Measures a line's indentation as leading-marker characters divided by 4.
///
/// Counting characters (not bytes) puts `│   ` and `├── ` prefixes and plain
/// 4-space indents on the same integer scale. Inconsistent source
/// indentation degrades to wrong nesting; that is an accepted limitation.
fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| INDENT_CHARS.contains(c)).count() / 4
}

/// Decides whether a line outside a fence belongs to a tree.
///
/// Matches branch glyphs in both Unicode and ASCII form, then falls back to
/// "non-blank and mentions a dot or slash" because trees are frequently
/// embedded in narrative markdown without fences.
fn is_tree_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }

    line.contains('├')
        || line.contains('└')
        || line.contains('│')
        || line.contains('─')
        || line.contains("|--")
        || line.contains("`--")
        || line.contains('/')
        || (!line.trim().is_empty() && line.contains('.'))
}

/// Strips branch-drawing tokens from a line and classifies the remainder.
///
/// A trailing `/` marks a directory. Otherwise a name without any `.` is
/// taken for a directory. The extension heuristic misclassifies dotted
/// directory names and extension-less files; accepted limitation. Returns
/// `None` when nothing usable remains.
fn extract_name(line: &str) -> Option<(String, bool)> {
    let mut cleaned = line.to_string();
    for token in BRANCH_TOKENS {
        cleaned = cleaned.replace(token, " ");
    }

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (name, is_directory) = match trimmed.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (trimmed, !trimmed.contains('.')),
    };

    if name.is_empty() {
        return None;
    }

    // A name is a single path segment; lines carrying whole paths are
    // dropped rather than smuggling separators into the model.
    if name.contains('/') || name.contains('\\') {
        debug!("Skipping line with path separators in name: '{}'", name);
        return None;
    }

    Some((name.to_string(), is_directory))
}
