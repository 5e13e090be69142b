//! Error types for pixelmap ingestion and rendering.

use thiserror::Error;

/// Result type alias using PixmapError.
pub type PixmapResult<T> = Result<T, PixmapError>;

/// Primary error type for pixelmap operations.
#[derive(Debug, Error)]
pub enum PixmapError {
    // === Metadata Errors ===
    /// The pixinfo metadata file is missing, truncated, or a line the fixed
    /// layout requires is absent or non-numeric. Fatal to construction.
    #[error("invalid pixinfo metadata: {0}")]
    MetadataFormat(String),

    // === Data Errors ===
    /// A sparse pixelmap data file is absent or holds a malformed record.
    #[error("invalid pixelmap file '{file}': {reason}")]
    SparseFormat { file: String, reason: String },

    /// The requested mineral is not present in the supplied endmember map.
    #[error("unknown mineral: {0}")]
    UnknownMineral(String),

    /// A file the computation cannot proceed without (e.g. `V_solids` when
    /// normalizing volume fractions) is absent.
    #[error("required pixelmap file missing: {0}")]
    MissingRequiredFile(String),

    /// The named endmember preset is not in the registry.
    #[error("unknown endmember preset: {0}")]
    UnknownPreset(String),

    // === Rendering Errors ===
    #[error("rendering failed: {0}")]
    Render(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

impl PixmapError {
    /// Create a MetadataFormat error.
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::MetadataFormat(msg.into())
    }

    /// Create a SparseFormat error.
    pub fn sparse(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SparseFormat {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for PixmapError {
    fn from(err: std::io::Error) -> Self {
        PixmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PixmapError {
    fn from(err: serde_json::Error) -> Self {
        PixmapError::Io(format!("JSON error: {}", err))
    }
}
