//! Error type shared by every fallible engine operation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// Invalid architecture, hyperparameters, or snapshot contents.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vector or dataset did not have the length the network expects.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `predict` was called before any successful `train`.
    #[error("network must be trained before making predictions")]
    NotTrained,

    /// A dataset file could not be turned into training rows.
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        NetworkError::DimensionMismatch { context, expected, actual }
    }
}
