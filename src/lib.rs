//! HPC failure prediction — windowed feature extraction over RAS log events.
//!
//! Modular structure:
//! - [`events`] — Parsed log events, windows, training examples
//! - [`windowing`] — Time-based window / sub-window / interval segmentation
//! - [`features`] — Per-window severity statistics and labels
//! - [`training`] — Sparse training file and prediction score formats
//! - [`strategy`] — Configured pipeline behind one interface
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod events;
pub mod windowing;
pub mod features;
pub mod training;
pub mod strategy;
pub mod logging;

pub use config::{PredictorConfig, StrategyConfig, StrategyKind};
pub use error::{ConfigurationError, Error, PredictionError, Result, StrategyError};
pub use events::{LogEvent, SubWindow, TrainingExample, Window, WindowSummary, NO_FATAL_SEEN};
pub use features::FeatureExtractor;
pub use strategy::{Strategy, WindowStrategy};
pub use training::TrainingRecordSerializer;
pub use logging::StructuredLogger;
