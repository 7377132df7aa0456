//! Time-based segmentation: ordered events → windows → interval windows.

use crate::error::{ConfigurationError, Result, StrategyError};
use crate::events::{LogEvent, Window};
use chrono::Duration;
use tracing::debug;

/// Width of one sub-window, or why the window cannot be split that way.
pub fn sub_window_delta(
    window_delta: Duration,
    number_of_sub_windows: usize,
) -> std::result::Result<Duration, ConfigurationError> {
    if number_of_sub_windows <= 1 {
        return Err(ConfigurationError::TooFewSubWindows(number_of_sub_windows));
    }
    let window_ms = window_delta.num_milliseconds();
    if window_ms <= 0 {
        return Err(ConfigurationError::NonPositiveDuration("window"));
    }
    let n = number_of_sub_windows as i64;
    if window_ms % n != 0 {
        return Err(ConfigurationError::UnevenSubWindows(number_of_sub_windows));
    }
    Ok(Duration::milliseconds(window_ms / n))
}

/// Intervals per sub-window, or why the sub-window cannot be split that way.
pub fn intervals_per_sub_window(
    sub_window_delta: Duration,
    interval_delta: Duration,
) -> std::result::Result<usize, ConfigurationError> {
    let interval_ms = interval_delta.num_milliseconds();
    if interval_ms <= 0 {
        return Err(ConfigurationError::NonPositiveDuration("interval"));
    }
    let sub_ms = sub_window_delta.num_milliseconds();
    if sub_ms <= 0 || sub_ms % interval_ms != 0 {
        return Err(ConfigurationError::UnevenIntervals);
    }
    Ok((sub_ms / interval_ms) as usize)
}

/// Split time-ordered events into consecutive `window_delta`-wide windows of
/// `number_of_sub_windows` sub-windows each, starting at the first event.
///
/// Windows with no events between busy ones are still emitted, so sub-windows
/// cover the whole span without gaps. The trailing window ends with the
/// sub-window holding the last event and is dropped if that leaves fewer than
/// two sub-windows.
pub fn segment(
    events: &[LogEvent],
    window_delta: Duration,
    number_of_sub_windows: usize,
) -> Result<Vec<Window>> {
    let sub_delta = sub_window_delta(window_delta, number_of_sub_windows)?;
    let Some(first) = events.first() else {
        return Ok(Vec::new());
    };
    if let Some(index) = events
        .windows(2)
        .position(|pair| pair[1].ts < pair[0].ts)
    {
        return Err(StrategyError::OutOfOrder { index: index + 1 }.into());
    }

    let origin = first.ts;
    let sub_ms = sub_delta.num_milliseconds();
    let mut windows: Vec<Window> = Vec::new();
    let mut last_slot = 0;

    for event in events {
        let slot = ((event.ts - origin).num_milliseconds() / sub_ms) as usize;
        let (w, s) = (slot / number_of_sub_windows, slot % number_of_sub_windows);
        while windows.len() <= w {
            let start = origin + window_delta * windows.len() as i32;
            windows.push(Window::empty(start, sub_delta, number_of_sub_windows));
        }
        windows[w].sub_windows[s].events.push(event.clone());
        last_slot = s;
    }

    if let Some(tail) = windows.last_mut() {
        tail.sub_windows.truncate(last_slot + 1);
        if tail.sub_windows.len() < 2 {
            debug!(sub_windows = tail.sub_windows.len(), "dropping trailing window");
            windows.pop();
        }
    }

    debug!(
        events = events.len(),
        windows = windows.len(),
        "segmented log into windows"
    );
    Ok(windows)
}

/// Subdivide every sub-window into `interval_delta`-wide intervals, giving one
/// interval window per input window, aligned one-to-one.
pub fn intervals(windows: &[Window], interval_delta: Duration) -> Result<Vec<Window>> {
    let interval_ms = interval_delta.num_milliseconds();
    let mut out = Vec::with_capacity(windows.len());

    for window in windows {
        let k = intervals_per_sub_window(window.sub_window_delta, interval_delta)?;
        let mut iw = Window::empty(window.start, interval_delta, window.sub_windows.len() * k);
        for (si, sub) in window.sub_windows.iter().enumerate() {
            for event in &sub.events {
                let offset = (event.ts - sub.start).num_milliseconds() / interval_ms;
                let i = offset.clamp(0, k as i64 - 1) as usize;
                iw.sub_windows[si * k + i].events.push(event.clone());
            }
        }
        out.push(iw);
    }
    Ok(out)
}
