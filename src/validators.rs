//! Validation helpers for paths, names and JSON input.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_PROJECT_NAME_LEN: usize = 255;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("pattern is valid"))
}

/// # Errors
/// * `Error::FileNotFound` if the path does not exist
/// * `Error::InvalidInput` if the path is not a regular file
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(Error::InvalidInput(format!("path is not a file: {}", path.display())));
    }
    Ok(())
}

/// # Errors
/// * `Error::DirectoryNotFound` if the path does not exist
/// * `Error::InvalidInput` if the path is not a directory
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::DirectoryNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(Error::InvalidInput(format!(
            "path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Verifies the effective parent of `path` accepts writes by creating and
/// immediately removing a probe file.
///
/// # Errors
/// * `Error::DirectoryNotFound` if the parent directory does not exist
/// * `Error::PermissionDenied` if the probe write fails
pub fn validate_path_writable(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().map_err(Error::IoError)?,
    };

    if !parent.exists() {
        return Err(Error::DirectoryNotFound(format!(
            "parent directory does not exist: {}",
            parent.display()
        )));
    }

    let stamp =
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or_default();
    let probe = parent.join(format!(".mason_write_test_{stamp}"));

    if fs::write(&probe, b"").is_err() {
        return Err(Error::PermissionDenied(format!(
            "cannot write to directory: {}",
            parent.display()
        )));
    }
    let _ = fs::remove_file(&probe);

    Ok(())
}

/// # Errors
/// * `Error::FileNotFound` / `Error::InvalidInput` if the path is not a file
/// * `Error::PermissionDenied` if the file cannot be opened for reading
pub fn validate_file_readable(path: &Path) -> Result<()> {
    validate_file_exists(path)?;

    if fs::File::open(path).is_err() {
        return Err(Error::PermissionDenied(format!("cannot read file: {}", path.display())));
    }

    Ok(())
}

/// Project names become directory names, so only a conservative character
/// set is accepted.
///
/// # Errors
/// * `Error::InvalidInput` when empty, too long, or outside `[a-zA-Z0-9_-]`
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidInput("project name cannot be empty".to_string()));
    }
    if name.len() > MAX_PROJECT_NAME_LEN {
        return Err(Error::InvalidInput(format!(
            "project name too long (max {MAX_PROJECT_NAME_LEN} characters)"
        )));
    }
    if !name_pattern().is_match(name) {
        return Err(Error::InvalidInput(
            "invalid project name, use only letters, numbers, hyphens and underscores"
                .to_string(),
        ));
    }
    Ok(())
}

/// # Errors
/// * `Error::InvalidInput` when empty or outside `[a-zA-Z0-9_-]`
pub fn validate_template_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidInput("template name cannot be empty".to_string()));
    }
    if !name_pattern().is_match(name) {
        return Err(Error::InvalidInput(
            "invalid template name, use only letters, numbers, hyphens and underscores"
                .to_string(),
        ));
    }
    Ok(())
}

/// # Errors
/// * `Error::InvalidJsonFormat` when the content does not parse as JSON
pub fn validate_json_format(content: &str) -> Result<()> {
    serde_json::from_str::<serde_json::Value>(content).map_err(|e| Error::InvalidJsonFormat {
        message: "invalid JSON format".to_string(),
        detail: e.to_string(),
    })?;
    Ok(())
}

/// Rejects names unusable as a directory entry on common filesystems.
pub fn is_valid_directory_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }

    name.chars().all(|c| !c.is_control() && !matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*'))
}

pub fn is_valid_filename(name: &str) -> bool {
    is_valid_directory_name(name)
}

pub fn has_markdown_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md") | Some("markdown")
    )
}

pub fn has_json_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}
