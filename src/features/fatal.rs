//! "Sub-windows since last fatal event", carried across windows as an explicit fold.

use crate::events::NO_FATAL_SEEN;

/// Distance to the most recent fatal sub-window, counting that sub-window as 1.
/// `None` until a fatal sub-window has been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FatalClock {
    since: Option<u64>,
}

impl FatalClock {
    /// Step past one sub-window.
    pub fn tick(self, had_fatal: bool) -> Self {
        let since = if had_fatal {
            Some(1)
        } else {
            self.since.map(|d| d.saturating_add(1))
        };
        Self { since }
    }

    pub fn value(&self) -> u64 {
        self.since.map_or(NO_FATAL_SEEN, |d| d.min(NO_FATAL_SEEN))
    }
}

/// Sequential prefix scan over per-window fatal flags (one flag per
/// sub-window, held-out last). Returns the clock value read after each
/// window's last non-held-out sub-window.
pub fn since_last_fatal(flags: &[Vec<bool>]) -> Vec<u64> {
    flags
        .iter()
        .scan(FatalClock::default(), |clock, window| {
            let (held_out, features) = match window.split_last() {
                Some((h, f)) => (Some(*h), f),
                None => (None, &[][..]),
            };
            *clock = features.iter().fold(*clock, |c, &f| c.tick(f));
            let value = clock.value();
            if let Some(h) = held_out {
                *clock = clock.tick(h);
            }
            Some(value)
        })
        .collect()
}
