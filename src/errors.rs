use thiserror::Error;

/// Errors that can occur while packaging a plugin.
#[derive(Error, Debug)]
pub enum PotextError {
    /// `info.json` is missing, malformed, or lacks a usable `id`.
    #[error("metadata error: {message}")]
    Metadata { message: String },

    /// One or more files required by the package are absent.
    #[error("missing files: {}", files.join(", "))]
    MissingFiles { files: Vec<String> },

    /// Writing the archive failed.
    #[error("pack error: {message}")]
    Pack { message: String },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, PotextError>`.
pub type Result<T> = std::result::Result<T, PotextError>;
