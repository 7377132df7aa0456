//! Windows → training examples.

use super::fatal::since_last_fatal;
use super::stats::{column_sums, mean_and_std};
use crate::config::{StatisticsBasis, StrategyKind};
use crate::error::StrategyError;
use crate::events::{SeverityCounts, SeverityTable, TrainingExample, Window, WindowSummary};
use crate::windowing::intervals_per_sub_window;
use tracing::debug;

pub struct FeatureExtractor {
    severities: SeverityTable,
    kind: StrategyKind,
    basis: StatisticsBasis,
}

impl FeatureExtractor {
    pub fn new(severities: SeverityTable, kind: StrategyKind, basis: StatisticsBasis) -> Self {
        Self {
            severities,
            kind,
            basis,
        }
    }

    /// One example per window, in window order. `interval_windows` must pair
    /// one-to-one with `windows` for the IBM-paper feature set and is ignored
    /// for the event-level one.
    pub fn extract(
        &self,
        windows: &[Window],
        interval_windows: &[Window],
    ) -> Result<Vec<TrainingExample>, StrategyError> {
        if windows.is_empty() {
            return Ok(Vec::new());
        }
        if let Some(w) = windows.iter().find(|w| w.sub_windows.len() <= 1) {
            return Err(StrategyError::TooFewSubWindows(w.sub_windows.len()));
        }

        // Every sub-window, held-out included; this also validates every event.
        let counts = windows
            .iter()
            .map(|w| self.tally(w))
            .collect::<Result<Vec<_>, _>>()?;

        let examples: Vec<TrainingExample> = match self.kind {
            StrategyKind::EventLevel => counts
                .into_iter()
                .map(|mut c| {
                    let held_out = c.pop().unwrap_or_default();
                    TrainingExample {
                        sub_window_counts: c,
                        summary: None,
                        label: self.severities.fatal_count(&held_out) > 0,
                    }
                })
                .collect(),
            StrategyKind::IbmPaper => self.ibm_paper(windows, interval_windows, counts)?,
        };

        debug!(
            windows = windows.len(),
            examples = examples.len(),
            kind = ?self.kind,
            "extracted training examples"
        );
        Ok(examples)
    }

    fn tally(&self, window: &Window) -> Result<Vec<SeverityCounts>, StrategyError> {
        window
            .sub_windows
            .iter()
            .map(|s| self.severities.count(&s.events))
            .collect()
    }

    fn ibm_paper(
        &self,
        windows: &[Window],
        interval_windows: &[Window],
        counts: Vec<Vec<SeverityCounts>>,
    ) -> Result<Vec<TrainingExample>, StrategyError> {
        if interval_windows.len() != windows.len() {
            return Err(StrategyError::Malformed);
        }
        let mut feature_intervals = Vec::with_capacity(windows.len());
        for (w, iw) in windows.iter().zip(interval_windows) {
            let k = intervals_per_sub_window(w.sub_window_delta, iw.sub_window_delta)
                .map_err(|_| StrategyError::Malformed)?;
            if iw.start != w.start || iw.sub_windows.len() != w.sub_windows.len() * k {
                return Err(StrategyError::Malformed);
            }
            let span = &iw.sub_windows[..(w.sub_windows.len() - 1) * k];
            let tallied = span
                .iter()
                .map(|i| self.severities.count(&i.events))
                .collect::<Result<Vec<_>, _>>()?;
            feature_intervals.push(tallied);
        }

        // The only cross-window dependency; everything after it is per window.
        let flags: Vec<Vec<bool>> = counts
            .iter()
            .map(|w| w.iter().map(|c| self.severities.fatal_count(c) > 0).collect())
            .collect();
        let since = since_last_fatal(&flags);

        counts
            .into_iter()
            .zip(feature_intervals)
            .zip(since)
            .map(|((c, intervals), distance)| self.summarize(c, intervals, distance))
            .collect()
    }

    fn summarize(
        &self,
        mut counts: Vec<SeverityCounts>,
        interval_counts: Vec<SeverityCounts>,
        since_last_fatal: u64,
    ) -> Result<TrainingExample, StrategyError> {
        let width = self.severities.len();
        let held_out = counts.pop().ok_or(StrategyError::Malformed)?;
        let aggregate = column_sums(&counts, width);
        let (mean, std_dev) = match self.basis {
            StatisticsBasis::SubWindows => mean_and_std(&counts, width)?,
            StatisticsBasis::Intervals => mean_and_std(&interval_counts, width)?,
        };
        Ok(TrainingExample {
            sub_window_counts: counts,
            summary: Some(WindowSummary {
                aggregate,
                interval_counts,
                mean,
                std_dev,
                since_last_fatal,
            }),
            label: self.severities.fatal_count(&held_out) > 0,
        })
    }
}
