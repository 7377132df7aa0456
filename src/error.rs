//! Error taxonomy. Messages are stable: callers match on the exact wording.

use thiserror::Error;

/// Raised while building a strategy; an invalid strategy is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Error configuring strategy, a window needs at least 2 sub-windows, got {0}!")]
    TooFewSubWindows(usize),

    #[error("Error configuring strategy, {0} must be a positive duration!")]
    NonPositiveDuration(&'static str),

    #[error("Error configuring strategy, {0} duration is out of range!")]
    DurationOutOfRange(&'static str),

    #[error("Error configuring strategy, cannot divide windows into {0} sub-windows evenly!")]
    UnevenSubWindows(usize),

    #[error("Error parsing windowed log data, cannot divide sub-windows into smaller intervals evenly!")]
    UnevenIntervals,

    #[error("Error configuring strategy, no severities given!")]
    NoSeverities,

    #[error("Error configuring strategy, duplicate severity {0}!")]
    DuplicateSeverity(String),

    #[error("Error configuring strategy, fatal severity {0} is not a configured severity!")]
    UnknownFatalSeverity(String),
}

/// Raised while windowing, extracting features, or building training file content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("Error parsing windowed log data, found window with {0} sub-windows!")]
    TooFewSubWindows(usize),

    #[error("Error parsing windowed log data, could not find {0} field!")]
    MissingField(String),

    #[error("Error parsing windowed log data, unknown severity {0}!")]
    UnknownSeverity(String),

    #[error("Error parsing windowed log data!")]
    Malformed,

    #[error("Error windowing log data, event {index} is earlier than the event before it!")]
    OutOfOrder { index: usize },

    #[error("Error building training file content: no examples given!")]
    NoExamples,

    #[error("Error building training file content: Invalid training data!")]
    InvalidTrainingData,
}

/// Raised while reading classifier output back against the examples it scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Error reading predictions, invalid score {value:?} on line {line}!")]
    InvalidScore { line: usize, value: String },

    #[error("Error evaluating predictions, expected {expected} predictions, got {got}!")]
    CountMismatch { expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
