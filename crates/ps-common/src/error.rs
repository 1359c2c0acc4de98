//! Error types for predstat.

use thiserror::Error;

/// Result type alias for predstat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for predstat.
///
/// Only malformed input shapes and configuration problems surface here.
/// Statistical edge cases (zero denominators, NaN scores, empty inputs) are
/// handled in-band by the statistic functions.
#[derive(Error, Debug)]
pub enum Error {
    // Input shape errors (10-19)
    #[error("mismatched input length: {scores} decision values vs {labels} labels")]
    LengthMismatch { scores: usize, labels: usize },

    #[error("mismatched split count: {decisions} decision-value splits vs {labels} label splits")]
    SplitCountMismatch { decisions: usize, labels: usize },

    #[error("split {index}: {source}")]
    InvalidSplit {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    // Configuration errors (20-29)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::LengthMismatch { .. } => 10,
            Error::SplitCountMismatch { .. } => 11,
            Error::InvalidSplit { .. } => 12,
            Error::Config(_) => 20,
            Error::UnknownMetric(_) => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Wrap an error with the index of the split it was raised for.
    pub fn in_split(self, index: usize) -> Self {
        Error::InvalidSplit {
            index,
            source: Box::new(self),
        }
    }
}
