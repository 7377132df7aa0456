//! Predictor configuration. Every field has a default, so a partial JSON file is enough.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Windowing and feature extraction
    pub strategy: StrategyConfig,
    /// Files exchanged with the external classifier
    pub output: OutputConfig,
    /// Logging
    pub log: LogConfig,
}

/// Which feature set a strategy produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Per sub-window severity counts only
    EventLevel,
    /// Counts, aggregates, interval series, mean, std-dev and time since last fatal
    #[default]
    IbmPaper,
}

/// Population the per-severity mean and standard deviation are taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsBasis {
    #[default]
    SubWindows,
    Intervals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    /// Width of one window (seconds)
    pub window_secs: u64,
    /// Sub-windows per window; the last one is held out for the label
    pub sub_windows: usize,
    /// Width of one interval (seconds); must divide the sub-window width
    pub interval_secs: u64,
    /// Severity tokens, in feature order
    pub severities: Vec<String>,
    /// Event field holding the severity token
    pub severity_keyword: String,
    /// Severity that makes a held-out sub-window positive
    pub fatal_severity: String,
    pub statistics_basis: StatisticsBasis,
    /// Write `index:0` pairs instead of leaving zero features implicit
    pub emit_zero_features: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sparse training file handed to the classifier
    pub training_file: PathBuf,
    /// Score file written back by the classifier
    pub predictions_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::default(),
            window_secs: 25 * 3600,
            sub_windows: 5,
            interval_secs: 3600,
            severities: ["INFO", "WARN", "ERROR", "FATAL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            severity_keyword: "SEVERITY".to_string(),
            fatal_severity: "FATAL".to_string(),
            statistics_basis: StatisticsBasis::default(),
            emit_zero_features: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            training_file: PathBuf::from("training.svm"),
            predictions_file: PathBuf::from("predictions.txt"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl PredictorConfig {
    /// Load from JSON file if present; otherwise return default. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
