use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the airhop library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// A search that finds no itinerary is not an error: it yields an empty
/// [`Route`](crate::Route). Only failures that happen before the search
/// (loading data, resolving airport codes) surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// A flat file is missing one of the columns we rely on.
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// A record could not be interpreted (e.g. non-numeric coordinates).
    #[error("invalid record in {file} at line {line}: {message}")]
    InvalidRecord {
        file: String,
        line: u64,
        message: String,
    },

    /// Raised when an airport code is not present in the directory.
    #[error("unknown airport: {code}")]
    UnknownAirport { code: String },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
