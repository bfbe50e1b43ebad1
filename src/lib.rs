pub mod archive;
pub mod errors;
pub mod fs_util;
pub mod models;
pub mod packer;
pub mod parser;

// Re-export key types at crate root for convenience.
pub use archive::{build_archive, ArchiveMember, ArchiveSummary};
pub use errors::{PotextError, Result};
pub use fs_util::{ensure_output_dir, verify_files};
pub use models::{
    FileSet, PluginInfo, DEFAULT_ICON, DEFAULT_OUTPUT_DIR, ENTRY_FILE, METADATA_FILE,
    PACKAGE_EXTENSION,
};
pub use packer::{pack, PackOptions, PackResult};
pub use parser::{load_metadata, parse_metadata};
