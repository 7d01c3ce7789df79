//! The in-memory hierarchy shared by the parser, renderer and generator.
//!
//! A tree is a single root [`Node`] (always a directory, named by the
//! caller) owning its children exclusively. There are no parent
//! back-pointers; anything that needs an ancestor keeps an explicit stack
//! of references instead.

/// Whether a node materializes as a directory or a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry in the project hierarchy.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// A single path segment. Never empty, never contains a separator.
    pub name: String,
    /// File content; `None` means "create an empty file". Ignored for
    /// directories.
    pub content: Option<String>,
    /// Ordered children. Insertion order is the on-disk creation order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a directory node with no children.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Directory,
            name: name.into(),
            content: None,
            children: Vec::new(),
        }
    }

    /// Creates an empty file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::File,
            name: name.into(),
            content: None,
            children: Vec::new(),
        }
    }

    /// Creates a file node with content.
    pub fn file_with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::File,
            name: name.into(),
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Appends `child` as the last child, preserving insertion order.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Finds a direct child by name.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
