use thiserror::Error;

/// Convenience result type for loading and session operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Error type shared by the dataset loader and the interactive session.
///
/// Data-source failures are fatal to a session cycle: nothing here is caught
/// or retried inside the library.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Underlying I/O error (e.g. missing city file, closed output stream).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The city file does not carry the columns the loader requires.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into its required type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    Parse {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
