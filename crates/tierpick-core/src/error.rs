//! Error types for tierpick-core.

use thiserror::Error;

use crate::models::AudioFormat;

/// Classification failure.
///
/// Raised when a catalog carries an encoding the quality table has no entry
/// for. This means the catalog and the table have drifted apart, so callers
/// propagate it instead of recovering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QualityError {
    #[error("Unknown format: {0}")]
    UnknownEncoding(AudioFormat),
}

/// Errors loading catalogs and settings from JSON.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or an unrecognized enum value
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A descriptor with neither a family nor a format
    #[error("Invalid audio file: {0}")]
    InvalidFile(String),

    /// A settings value outside the accepted set
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}
