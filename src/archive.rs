//! Zip writer for `.potext` packages.
//!
//! Members are deflated and stamped with a fixed modification time and fixed
//! permissions, so packing unchanged files yields byte-identical archives.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::errors::{PotextError, Result};
use crate::fs_util::file_size;
use crate::models::FileSet;

/// Permissions recorded for every member.
const MEMBER_PERMISSIONS: u32 = 0o644;

/// One file written into an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    /// Member name inside the archive (`/`-separated).
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
}

/// Outcome of a successful [`build_archive`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Path of the archive on disk.
    pub path: PathBuf,
    /// Members in the order they were written.
    pub members: Vec<ArchiveMember>,
    /// Final archive size in bytes.
    pub size: u64,
}

/// Write `files` (relative to `root`) into a new zip archive at `output`.
///
/// Any existing file at `output` is truncated. Each member keeps its relative
/// name, normalised to `/` separators.
///
/// # Errors
///
/// Returns [`PotextError::Pack`] if two files map to the same member name,
/// in which case `output` is left untouched, or if a source file cannot be
/// read or the archive cannot be written. A partially written archive may
/// remain in the latter case.
pub fn build_archive(root: &Path, output: &Path, files: &FileSet) -> Result<ArchiveSummary> {
    let names: Vec<String> = files.iter().map(member_name).collect();
    {
        let mut seen = HashSet::new();
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(PotextError::Pack {
                message: format!("duplicate archive member {dup}"),
            });
        }
    }

    let pack_err = |what: String| move |e: std::io::Error| PotextError::Pack {
        message: format!("{what}: {e}"),
    };

    let file = File::create(output)
        .map_err(pack_err(format!("cannot create {}", output.display())))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(MEMBER_PERMISSIONS);

    let mut members = Vec::with_capacity(names.len());
    for (name, member) in files.iter().zip(names) {
        let src = root.join(name);
        let mut reader =
            File::open(&src).map_err(pack_err(format!("cannot open {}", src.display())))?;

        zip.start_file(member.as_str(), options).map_err(|e| PotextError::Pack {
            message: format!("cannot add {member}: {e}"),
        })?;
        let size = std::io::copy(&mut reader, &mut zip)
            .map_err(pack_err(format!("cannot compress {}", src.display())))?;
        debug!(member = %member, size, "added archive member");
        members.push(ArchiveMember { name: member, size });
    }

    zip.finish().map_err(|e| PotextError::Pack {
        message: format!("cannot finish {}: {e}", output.display()),
    })?;

    let size = file_size(output).map_err(|e| PotextError::Pack {
        message: format!("cannot stat {}: {e}", output.display()),
    })?;
    info!(path = %output.display(), size, "archive written");

    Ok(ArchiveSummary {
        path: output.to_path_buf(),
        members,
        size,
    })
}

/// Archive member name for a relative file name.
///
/// Backslashes become `/` and leading `./` segments are dropped, so
/// `.\assets\icon.svg` is stored as `assets/icon.svg`.
#[must_use]
pub fn member_name(name: &str) -> String {
    name.replace('\\', "/")
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}
