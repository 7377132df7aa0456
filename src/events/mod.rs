//! Log events as handed over by the log parser, and the windows they are grouped into.

mod severity;

pub use severity::SeverityTable;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One parsed RAS record. Only `ts` and the severity field matter here; the
/// rest (component, node, message, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl LogEvent {
    pub fn new(ts: DateTime<Utc>) -> Self {
        Self {
            ts,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter, mostly for tests and fixtures.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Events falling in `[start, start + width)` of the owning window.
#[derive(Debug, Clone, PartialEq)]
pub struct SubWindow {
    pub start: DateTime<Utc>,
    pub events: Vec<LogEvent>,
}

impl SubWindow {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            events: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Contiguous, equally wide sub-windows. Interval windows reuse this type with
/// intervals in place of sub-windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub sub_window_delta: Duration,
    pub sub_windows: Vec<SubWindow>,
}

impl Window {
    /// Empty window of `count` sub-windows starting at `start`.
    pub fn empty(start: DateTime<Utc>, sub_window_delta: Duration, count: usize) -> Self {
        let sub_windows = (0..count)
            .map(|i| SubWindow::new(start + sub_window_delta * i as i32))
            .collect();
        Self {
            start,
            sub_window_delta,
            sub_windows,
        }
    }

    /// End of the time span actually covered (exclusive).
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.sub_window_delta * self.sub_windows.len() as i32
    }

    pub fn event_count(&self) -> usize {
        self.sub_windows.iter().map(SubWindow::len).sum()
    }
}

/// Event counts per severity, in configured severity order.
pub type SeverityCounts = Vec<u64>;

/// Sub-window count reported when no fatal event has been seen yet.
pub const NO_FATAL_SEEN: u64 = i32::MAX as u64;

/// Window-level statistics produced by the IBM-paper feature set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Per-severity totals over the non-held-out sub-windows
    pub aggregate: SeverityCounts,
    /// Per-interval counts over the non-held-out sub-windows, chronological
    pub interval_counts: Vec<SeverityCounts>,
    /// Per-severity mean, two decimals
    pub mean: Vec<f64>,
    /// Per-severity population standard deviation, two decimals
    pub std_dev: Vec<f64>,
    /// Sub-windows elapsed since the last one holding a fatal event
    pub since_last_fatal: u64,
}

/// One row of classifier input: features for a window plus its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub sub_window_counts: Vec<SeverityCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<WindowSummary>,
    pub label: bool,
}
