//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Error messages with context
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors that can occur while loading the movie dataset
///
/// Dataset loading is fatal-on-failure: there is no recovery path, the
/// application cannot run without its table. These variants exist so the
/// binary can report *why* startup failed.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while opening or reading the CSV file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader failed (malformed row, wrong field count, bad UTF-8)
    #[error("CSV error in {path}: {source}")]
    CsvError {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A required raw column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// The file parsed but contained no data rows
    #[error("Dataset at {path} contains no rows")]
    EmptyDataset { path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
