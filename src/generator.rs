//! Filesystem generation functionality.
//!
//! Walks a [`Node`] hierarchy depth-first and materializes it under a
//! destination directory, creating directories and files in their stored
//! order. The traversal is fail-stop: the first error aborts the run and
//! whatever was created before it stays on disk (there is no rollback).
//! Pre-existing directories and skipped files are absorbed as statistics,
//! never reported as errors.

use crate::error::{Error, Result};
use crate::model::Node;
use crate::validators;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Progress notification invoked synchronously immediately before each
/// node's I/O: `(path, is_directory, current_index, total_node_count)`.
/// `current_index` is 1-based and includes the root.
pub type ProgressCallback = Box<dyn Fn(&Path, bool, usize, usize)>;

/// Generation behavior switches.
#[derive(Default)]
pub struct Options {
    /// Simulate only: perform the same existence checks and report the same
    /// counts as a real run, without touching the filesystem.
    pub dry_run: bool,
    /// When false, existing files are silently skipped instead of rewritten.
    pub overwrite: bool,
    /// Emit a log line per visited node.
    pub verbose: bool,
    pub progress: Option<ProgressCallback>,
}

/// Aggregate statistics for one `generate` call.
///
/// Counters only cover entries actually created (or, in a dry run, entries
/// that would be): pre-existing directories and skipped files do not count,
/// so a repeated run over the same destination reports zeros.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub files_created: usize,
    pub dirs_created: usize,
    /// Bytes persisted, read back from the filesystem after each write.
    pub total_bytes: u64,
    pub elapsed: Duration,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Files created: {}", self.files_created)?;
        writeln!(f, "  Directories created: {}", self.dirs_created)?;
        writeln!(f, "  Total size: {} bytes", self.total_bytes)?;
        write!(f, "  Time elapsed: {}ms", self.elapsed.as_millis())
    }
}

/// Materializes hierarchies onto the filesystem.
pub struct Generator {
    options: Options,
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Generates the hierarchy with the root node mapped onto `destination`.
    ///
    /// Validation runs before any mutation; a validation failure aborts with
    /// zero side effects. The total node count is computed once up front so
    /// progress fractions stay stable for the whole run.
    ///
    /// # Errors
    /// * `Error::DirectoryNotFound` if the destination's parent is missing
    /// * `Error::PermissionDenied` if the destination's parent is not writable
    /// * `Error::FileAlreadyExists` on a name collision with the wrong type
    /// * `Error::CannotCreateDirectory` / `Error::CannotCreateFile` on I/O
    ///   failure, carrying the OS error text
    pub fn generate(&self, root: &Node, destination: impl AsRef<Path>) -> Result<Stats> {
        let destination = destination.as_ref();
        debug!("Starting generation at '{}'", destination.display());

        self.validate(destination)?;

        let total = root.count();
        let mut current = 0;
        let mut stats = Stats::default();
        let start = Instant::now();

        self.generate_node(root, destination, &mut current, total, &mut stats)?;

        stats.elapsed = start.elapsed();

        debug!(
            "Generation complete: {} files, {} directories",
            stats.files_created, stats.dirs_created
        );

        Ok(stats)
    }

    fn validate(&self, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::DirectoryNotFound(format!(
                    "parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        validators::validate_path_writable(destination)
    }

    /// Depth-first, pre-order, fail-stop traversal. Children are visited in
    /// stored order, which is the user-facing on-disk creation order.
    fn generate_node(
        &self,
        node: &Node,
        path: &Path,
        current: &mut usize,
        total: usize,
        stats: &mut Stats,
    ) -> Result<()> {
        *current += 1;
        self.notify_progress(path, node.is_directory(), *current, total);

        if node.is_directory() {
            if self.create_directory(path)? {
                stats.dirs_created += 1;
            }

            for child in &node.children {
                let child_path = path.join(&child.name);
                self.generate_node(child, &child_path, current, total, stats)?;
            }
        } else if self.create_file(path, node.content.as_deref().unwrap_or(""))? {
            stats.files_created += 1;

            // Actual bytes persisted, not the in-memory content length.
            if !self.options.dry_run {
                if let Ok(metadata) = fs::metadata(path) {
                    stats.total_bytes += metadata.len();
                }
            }
        }

        Ok(())
    }

    /// Returns whether the directory was (or in a dry run, would be)
    /// created. An existing directory is success without creation.
    fn create_directory(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            if path.is_dir() {
                debug!("Directory already exists: '{}'", path.display());
                return Ok(false);
            }
            return Err(Error::FileAlreadyExists(format!(
                "path exists but is not a directory: {}",
                path.display()
            )));
        }

        if self.options.dry_run {
            debug!("[dry run] Would create directory: '{}'", path.display());
            return Ok(true);
        }

        fs::create_dir_all(path).map_err(|e| Error::CannotCreateDirectory {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        debug!("Created directory: '{}'", path.display());
        Ok(true)
    }

    /// Returns whether the file was (or in a dry run, would be) written.
    /// An existing file without `overwrite` is skipped silently.
    fn create_file(&self, path: &Path, content: &str) -> Result<bool> {
        if path.exists() && !self.options.overwrite {
            debug!("Skipping existing file: '{}'", path.display());
            return Ok(false);
        }

        if self.options.dry_run {
            debug!("[dry run] Would create file: '{}'", path.display());
            return Ok(true);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| Error::CannotCreateDirectory {
                    path: parent.display().to_string(),
                    detail: e.to_string(),
                })?;
            }
        }

        fs::write(path, content).map_err(|e| Error::CannotCreateFile {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        debug!("Created file: '{}'", path.display());
        Ok(true)
    }

    fn notify_progress(&self, path: &Path, is_directory: bool, current: usize, total: usize) {
        if let Some(callback) = &self.options.progress {
            callback(path, is_directory, current, total);
        }

        if self.options.verbose {
            let kind = if is_directory { "DIR " } else { "FILE" };
            info!("[{}/{}] {} {}", current, total, kind, path.display());
        }
    }
}
