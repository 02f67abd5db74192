//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Failures raised by the graph store, the solvers, and ingestion.
///
/// A solver that cannot close a tour does not fail: it returns the
/// [`TspResult::no_solution`](crate::models::TspResult::no_solution) sentinel
/// (or `None` for the ant colony). Errors are reserved for broken
/// preconditions and I/O.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("vertex {0} not found")]
    VertexNotFound(u64),
    #[error("vertex {0} has no coordinates")]
    MissingCoordinates(u64),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
