//! Error types for formcheck operations.
//!
//! Per-field validation failures are not errors; they are reported as data
//! in [`crate::report::ValidationReport`]. This enum covers the operational
//! boundary only: backend lookup by string, payload I/O, schema compilation,
//! and configuration loading.

use thiserror::Error;

/// Result type for formcheck operations.
pub type Result<T> = std::result::Result<T, FormcheckError>;

#[derive(Error, Debug)]
pub enum FormcheckError {
    #[error("unknown backend '{0}' (expected one of: jsonschema, garde, fluent)")]
    UnknownBackend(String),

    #[error("failed to compile the JSON Schema document: {0}")]
    SchemaCompile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
