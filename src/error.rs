//! Error types of this crate.

use thiserror::Error;

/// Errors raised while configuring, fitting, or querying a cBOSS ensemble.
#[derive(Error, Debug)]
pub enum CbossError {
    /// The minimal window is larger than the maximal window plus one.
    #[error(
        "min_window = {min_window} is bigger than max_window = {max_window} \
         (series length is {series_length}). \
         Shrink `min_window` or raise `max_win_len_prop`"
    )]
    InvalidWindow {
        /// The configured minimal window.
        min_window: usize,
        /// The maximal window derived from the series length.
        max_window: usize,
        /// Length of the training series.
        series_length: usize,
    },

    /// A configuration value is outside its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending option.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Two lengths that must agree do not.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// What was expected.
        expected: String,
        /// What was given.
        actual: String,
    },

    /// Not enough training instances to subsample.
    #[error("Insufficient data: need at least {required} instances, got {actual}")]
    InsufficientData {
        /// Minimal number of instances.
        required: usize,
        /// Number of instances given.
        actual: usize,
    },

    /// The input has a layout this classifier does not handle.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// A base learner failed during fit or prediction.
    #[error("Base learner failed: {0}")]
    BaseLearner(String),

    /// The worker pool could not be created.
    #[error("Failed to build the thread pool: {0}")]
    ThreadPool(String),

    /// A JSON configuration could not be parsed.
    #[error("Malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, CbossError>;
