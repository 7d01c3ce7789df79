//! mason generates project structures on disk from two kinds of input:
//! ASCII trees drawn inside markdown documents, and JSON templates kept in
//! a catalog directory. Parsing is forgiving of human-authored input;
//! generation is idempotent where it can be and fail-stop where it cannot.

/// Command-line interface module for the mason application
pub mod cli;

/// Error types and handling for the mason application
pub mod error;

/// Filesystem generation: materializes a hierarchy under a destination
/// directory with statistics and progress reporting
pub mod generator;

/// Logger initialization
pub mod logger;

/// The hierarchy model shared by the parser, renderer and generator
pub mod model;

/// Markdown tree parsing: recovers a hierarchy from ASCII trees embedded
/// in text documents
pub mod parser;

/// Tree rendering: draws a hierarchy back out as an ASCII tree
pub mod renderer;

/// Conversion from JSON structure literals into the hierarchy model
pub mod structure;

/// Template catalog: discovery, lookup, search and listing of JSON
/// template documents
pub mod templates;

/// Colored terminal output helpers
pub mod ui;

/// Path, name and JSON validation helpers
pub mod validators;
