//! Error types for moxfield_export

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the scanner-to-Moxfield conversion
#[derive(Debug, Error)]
pub enum ExportError {
    /// The scanner export does not exist
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The scanner export exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required header is absent from the first row
    #[error("Missing required column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A data row could not be mapped onto the required columns
    #[error("Malformed row at line {line} in {}: {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// The CSV reader itself failed (bad quoting, invalid UTF-8, ...)
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing the deck list failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Echoing the deck list to the console failed
    #[error("Failed to echo deck list to console: {0}")]
    Console(#[source] std::io::Error),
}

/// Result alias for moxfield_export operations
pub type Result<T> = std::result::Result<T, ExportError>;
