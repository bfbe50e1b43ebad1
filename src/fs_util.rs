//! Filesystem helpers for the packaging pipeline.
//!
//! Existence checks follow symlinks: a symlinked icon is packed with the
//! contents of its target.

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::models::FileSet;

/// Returns `true` if the path resolves to a regular file.
#[must_use]
pub(crate) fn is_packable_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

/// Create the output directory and any missing parents.
///
/// Succeeds silently if the directory already exists.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created, e.g. because a
/// file occupies the path.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    debug!(dir = %path.display(), "output directory ready");
    Ok(())
}

/// List the members of `files` that do not exist under `root`.
///
/// Names are returned in `files` order; an empty list means every file is
/// present.
#[must_use]
pub fn verify_files(root: &Path, files: &FileSet) -> Vec<String> {
    files
        .iter()
        .filter(|name| !is_packable_file(&root.join(name)))
        .map(str::to_string)
        .collect()
}

/// Size of a file in bytes.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be stat'ed.
pub fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}
