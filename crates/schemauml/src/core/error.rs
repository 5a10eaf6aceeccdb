//! Core error types for schema conversion
//!
//! This module defines the error type shared by the schema sources, the
//! output sink and the JSON decoding layer. The transformer itself never
//! fails.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, SchemaUmlError>;

/// Error types for schema acquisition, decoding and output
#[derive(Error, Debug)]
pub enum SchemaUmlError {
    #[error("Read error: failed to read '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: failed to write '{}': {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Schema error: {message}")]
    SchemaError { message: String },

    #[error("Response format is unexpected: expected a `results` field")]
    MissingResults,

    #[cfg(not(target_arch = "wasm32"))]
    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP status {status} from {url}")]
    StatusError { status: u16, url: String },
}

impl SchemaUmlError {
    /// Create a new read error
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a new schema shape error
    pub fn schema_error(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status_error(status: u16, url: impl Into<String>) -> Self {
        Self::StatusError {
            status,
            url: url.into(),
        }
    }
}
