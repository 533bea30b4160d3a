use std::io;

use thiserror::Error;

/// Error type for catalog loading.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source cannot be parsed into the expected shape, or a gene
    /// feature lacks a location descriptor. Fatal for the input file.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A result tuple carries a field of an incompatible type (for
    /// example a non-string chromosome). Fatal for the run.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for table export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
