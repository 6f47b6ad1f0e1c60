use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the sales dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A sales record could not be coerced to its semantic types, or the
    /// table as a whole is malformed (wrong row count, out-of-order months).
    #[error("Malformed sales data: {0}")]
    DataFormat(String),

    /// An external data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filter selection names a month not present in the dataset.
    #[error("Unknown month filter: {0}")]
    InvalidFilter(String),

    /// An aggregate was requested over a view with no records.
    #[error("Cannot aggregate an empty view")]
    EmptyView,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
