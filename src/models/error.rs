//! Errors surfaced to callers of the tracker.

use crate::store::StoreError;

/// Errors that can occur during tracker operations.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerError {
    /// Rejected input (e.g. blank name). No state was changed.
    InvalidInput(&'static str),
    /// No series with this id.
    SeriesNotFound(String),
    /// No current series to operate on (tracker not initialised).
    NoSeriesSelected,
    /// Persisting failed. In-memory state has already advanced.
    Storage(StoreError),
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            TrackerError::SeriesNotFound(id) => write!(f, "Series '{}' not found", id),
            TrackerError::NoSeriesSelected => write!(f, "No series selected"),
            TrackerError::Storage(e) => write!(f, "Could not save: {}", e),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<StoreError> for TrackerError {
    fn from(e: StoreError) -> Self {
        TrackerError::Storage(e)
    }
}
