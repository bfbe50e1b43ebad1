use serde::Deserialize;

/// Script entry point of a plugin.
pub const ENTRY_FILE: &str = "main.js";

/// Metadata descriptor of a plugin.
pub const METADATA_FILE: &str = "info.json";

/// Icon used when `info.json` does not declare one.
pub const DEFAULT_ICON: &str = "icon.svg";

/// File extension of a packaged plugin.
pub const PACKAGE_EXTENSION: &str = "potext";

/// Output directory, relative to the plugin source directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Parsed contents of `info.json`.
///
/// Only `id` is required. Keys not modelled here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub icon: Option<String>,
    pub display: Option<String>,
    pub homepage: Option<String>,
}

impl PluginInfo {
    /// Icon file name, falling back to [`DEFAULT_ICON`].
    #[must_use]
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// File name of the package built from this plugin, e.g. `foo.potext`.
    #[must_use]
    pub fn package_file_name(&self) -> String {
        format!("{}.{PACKAGE_EXTENSION}", self.id)
    }

    /// The files that make up the package, in archive order.
    #[must_use]
    pub fn file_set(&self) -> FileSet {
        FileSet::new(self.icon())
    }
}

/// Ordered list of files packed into an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<String>,
}

impl FileSet {
    /// Entry script, metadata descriptor, then `icon`.
    #[must_use]
    pub fn new(icon: &str) -> Self {
        Self {
            files: vec![ENTRY_FILE.to_string(), METADATA_FILE.to_string(), icon.to_string()],
        }
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}
