//! Sliding-window learning strategies: one interface, variants picked by configuration.

use crate::config::{StrategyConfig, StrategyKind};
use crate::error::{ConfigurationError, Result, StrategyError};
use crate::events::{LogEvent, SeverityTable, TrainingExample, Window};
use crate::features::FeatureExtractor;
use crate::training::TrainingRecordSerializer;
use crate::windowing;
use chrono::Duration;
use tracing::{debug, info};

/// Everything needed to go from parsed log events to classifier input.
pub trait WindowStrategy {
    /// Ordered events → windows of sub-windows.
    fn segment(&self, events: &[LogEvent]) -> Result<Vec<Window>>;

    /// Windows → interval windows, aligned one-to-one.
    fn intervals(&self, windows: &[Window]) -> Result<Vec<Window>>;

    fn extract(
        &self,
        windows: &[Window],
        interval_windows: &[Window],
    ) -> std::result::Result<Vec<TrainingExample>, StrategyError>;

    fn serialize(&self, examples: &[TrainingExample])
        -> std::result::Result<String, StrategyError>;
}

pub struct Strategy {
    kind: StrategyKind,
    window_delta: Duration,
    sub_windows: usize,
    interval_delta: Duration,
    extractor: FeatureExtractor,
    serializer: TrainingRecordSerializer,
}

impl Strategy {
    /// Validate `config` and build the strategy it describes.
    pub fn new(config: StrategyConfig) -> std::result::Result<Self, ConfigurationError> {
        let window_delta = duration_secs(config.window_secs, "window")?;
        let interval_delta = duration_secs(config.interval_secs, "interval")?;
        let sub_delta = windowing::sub_window_delta(window_delta, config.sub_windows)?;
        windowing::intervals_per_sub_window(sub_delta, interval_delta)?;

        let severities = SeverityTable::new(
            config.severities,
            config.severity_keyword,
            &config.fatal_severity,
        )?;
        let serializer = TrainingRecordSerializer::new(severities.len(), config.emit_zero_features);
        let extractor = FeatureExtractor::new(severities, config.kind, config.statistics_basis);

        debug!(
            kind = ?config.kind,
            window_secs = config.window_secs,
            sub_windows = config.sub_windows,
            interval_secs = config.interval_secs,
            "strategy configured"
        );
        Ok(Self {
            kind: config.kind,
            window_delta,
            sub_windows: config.sub_windows,
            interval_delta,
            extractor,
            serializer,
        })
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Segment, subdivide and extract in one pass. A short trailing window is
    /// skipped since its features cannot line up with full windows.
    pub fn training_examples(&self, events: &[LogEvent]) -> Result<Vec<TrainingExample>> {
        let mut windows = self.segment(events)?;
        if windows
            .last()
            .is_some_and(|w| w.sub_windows.len() < self.sub_windows)
        {
            let tail = windows.pop();
            debug!(
                sub_windows = tail.map(|w| w.sub_windows.len()),
                "skipping partial trailing window"
            );
        }
        let interval_windows = match self.kind {
            StrategyKind::IbmPaper => self.intervals(&windows)?,
            StrategyKind::EventLevel => Vec::new(),
        };
        let examples = self.extract(&windows, &interval_windows)?;
        info!(
            events = events.len(),
            windows = windows.len(),
            examples = examples.len(),
            positives = examples.iter().filter(|e| e.label).count(),
            "built training examples"
        );
        Ok(examples)
    }
}

fn duration_secs(secs: u64, what: &'static str) -> std::result::Result<Duration, ConfigurationError> {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or(ConfigurationError::DurationOutOfRange(what))
}

impl WindowStrategy for Strategy {
    fn segment(&self, events: &[LogEvent]) -> Result<Vec<Window>> {
        windowing::segment(events, self.window_delta, self.sub_windows)
    }

    fn intervals(&self, windows: &[Window]) -> Result<Vec<Window>> {
        windowing::intervals(windows, self.interval_delta)
    }

    fn extract(
        &self,
        windows: &[Window],
        interval_windows: &[Window],
    ) -> std::result::Result<Vec<TrainingExample>, StrategyError> {
        self.extractor.extract(windows, interval_windows)
    }

    fn serialize(
        &self,
        examples: &[TrainingExample],
    ) -> std::result::Result<String, StrategyError> {
        self.serializer.serialize(examples)
    }
}
