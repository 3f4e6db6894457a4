//! Error types for the commodity_forecast crate

use thiserror::Error;

/// Custom error types for the commodity_forecast crate
#[derive(Debug, Error)]
pub enum PredictError {
    /// A label is not part of the trained vocabulary
    #[error("Unknown {kind}: '{label}'")]
    UnknownCategory {
        /// Which vocabulary was queried ("province" or "commodity")
        kind: &'static str,
        /// The label that failed to encode
        label: String,
    },

    /// Neither the raw nor the trimmed label could be encoded
    #[error("Encoding failure: {0}")]
    EncodingFailure(String),

    /// Target month outside 1..=12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error reported by the trained estimator
    #[error("Model error: {0}")]
    ModelError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, PredictError>;
