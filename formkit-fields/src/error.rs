//! Error types for schema loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while loading or compiling a schema.
///
/// Deriving defaults never fails; only getting a schema into memory can.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Top-level schema is not an object
    #[error("schema must be an object, found '{kind}'")]
    NotAnObject { kind: String },

    /// Schema file extension not recognized
    #[error("unsupported schema format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
