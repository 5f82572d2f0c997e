//! Error types for delivery-note

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{join_fields, FieldName};

/// Returned when a string does not name a known field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: {0}")]
pub struct UnknownFieldError(pub String);

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Form layout errors
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Form layout has no fields")]
    Empty,

    #[error("Field listed twice in form layout: {0}")]
    Duplicate(FieldName),

    #[error("Failed to parse form layout: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    /// One or more required fields were empty; no document was produced
    #[error("Incomplete record, please fill in: {}", join_fields(.missing))]
    IncompleteRecord { missing: Vec<FieldName> },

    /// Backing file exists but cannot be read or holds a malformed row
    #[error("Storage unavailable ({}): {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    /// Backing file could not be written; the value was not persisted
    #[error("Storage write error ({}): {reason}", .path.display())]
    StorageWrite { path: PathBuf, reason: String },

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("PDF export error: {0}")]
    Pdf(String),
}

impl Error {
    pub fn storage_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn storage_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::StorageWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Missing fields, if this is an `IncompleteRecord`
    pub fn missing_fields(&self) -> Option<&[FieldName]> {
        match self {
            Error::IncompleteRecord { missing } => Some(missing),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
