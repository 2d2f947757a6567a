//! Error types for persistence, export and import.
//!
//! Mutations never fail; only the edges that touch storage, archives or
//! foreign CSV files return these errors.

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors raised while loading or saving the state snapshot
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot written by an unknown schema version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("No storage directory available")]
    NoStorageDir,
}

/// Result type alias for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors raised while producing an export bundle
#[derive(Error, Debug)]
pub enum ExportError {
    /// The tree failed pre-export validation; nothing was produced
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while importing a form from CSV
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImportError {
    #[error("Empty file")]
    EmptyFile,

    #[error("Unrecognized header: {0}")]
    UnknownHeader(String),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Missing main question row")]
    MissingMainQuestion,
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;
