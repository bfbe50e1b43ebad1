//! Plugin packaging: turns a plugin source directory into a `.potext` archive.
//!
//! The pipeline is linear. Metadata is loaded and the file set verified
//! before anything is written, so a failed gate leaves the output archive
//! untouched.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::archive::{build_archive, ArchiveSummary};
use crate::errors::{PotextError, Result};
use crate::fs_util::{ensure_output_dir, verify_files};
use crate::models::{PluginInfo, DEFAULT_OUTPUT_DIR};
use crate::parser::load_metadata;

/// Options for a packaging run.
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Directory holding `main.js`, `info.json` and the icon.
    pub source_dir: PathBuf,
    /// Directory receiving the archive.
    pub output_dir: PathBuf,
}

impl PackOptions {
    /// Options for `source_dir`, writing into `<source_dir>/dist`.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let output_dir = source_dir.join(DEFAULT_OUTPUT_DIR);
        Self {
            source_dir,
            output_dir,
        }
    }

    /// Override the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for PackOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Result of a successful packaging run.
#[derive(Debug)]
pub struct PackResult {
    /// Metadata the package was built from.
    pub info: PluginInfo,
    /// The written archive.
    pub archive: ArchiveSummary,
}

impl PackResult {
    /// Path of the written archive.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.archive.path
    }
}

/// Package the plugin described by `opts`.
///
/// # Errors
///
/// - [`PotextError::Metadata`] if `info.json` is unusable; nothing is created.
/// - [`PotextError::MissingFiles`] listing every absent file; no archive is
///   written.
/// - [`PotextError::Io`] if the output directory cannot be created.
/// - [`PotextError::Pack`] if writing the archive fails.
pub fn pack(opts: &PackOptions) -> Result<PackResult> {
    let info = load_metadata(&opts.source_dir)?;
    ensure_output_dir(&opts.output_dir)?;

    let files = info.file_set();
    let missing = verify_files(&opts.source_dir, &files);
    if !missing.is_empty() {
        return Err(PotextError::MissingFiles { files: missing });
    }

    let output = opts.output_dir.join(info.package_file_name());
    let archive = build_archive(&opts.source_dir, &output, &files)?;
    info!(id = %info.id, path = %output.display(), "plugin packed");

    Ok(PackResult { info, archive })
}
