//! Error handling for the mason application.
//! Defines the closed set of error kinds used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for mason operations.
///
/// Every failure the library can report is one of these variants. Filesystem
/// creation errors carry the underlying OS error text in a `detail` field so
/// callers can surface the root cause without losing the typed kind.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Cannot create directory '{path}': {detail}")]
    CannotCreateDirectory { path: String, detail: String },

    #[error("Cannot create file '{path}': {detail}")]
    CannotCreateFile { path: String, detail: String },

    /// The parser found nothing that looks like a tree in the document.
    #[error("Invalid markdown format: {0}")]
    InvalidMarkdownFormat(String),

    #[error("Invalid JSON format: {message}: {detail}")]
    InvalidJsonFormat { message: String, detail: String },

    #[error("Invalid template structure: {0}")]
    InvalidTemplateStructure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template is invalid: {0}")]
    TemplateInvalid(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with mason's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    crate::ui::error(&err.to_string());
    std::process::exit(1);
}
