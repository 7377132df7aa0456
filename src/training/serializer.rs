//! Sparse `label index:value ...` text consumed by the external SVM trainer/predictor.

use crate::error::StrategyError;
use crate::events::TrainingExample;

const POSITIVE: &str = "+1";
const NEGATIVE: &str = "-1";

#[derive(Debug, Clone, Copy)]
enum Feature {
    Count(u64),
    Stat(f64),
}

impl Feature {
    fn is_zero(self) -> bool {
        match self {
            Feature::Count(c) => c == 0,
            Feature::Stat(x) => x == 0.0,
        }
    }
}

/// Shape every example in one file must share, so feature indices line up.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    sub_windows: usize,
    intervals: Option<usize>,
}

pub struct TrainingRecordSerializer {
    width: usize,
    emit_zero_features: bool,
}

impl TrainingRecordSerializer {
    /// `width` is the number of configured severities.
    pub fn new(width: usize, emit_zero_features: bool) -> Self {
        Self {
            width,
            emit_zero_features,
        }
    }

    /// One line per example, in input order, each `\n`-terminated.
    pub fn serialize(&self, examples: &[TrainingExample]) -> Result<String, StrategyError> {
        let first = examples.first().ok_or(StrategyError::NoExamples)?;
        let layout = self.layout(first)?;
        for e in &examples[1..] {
            if self.layout(e)? != layout {
                return Err(StrategyError::InvalidTrainingData);
            }
        }

        let mut out = String::new();
        for e in examples {
            out.push_str(if e.label { POSITIVE } else { NEGATIVE });
            for (i, f) in flatten(e).into_iter().enumerate() {
                if !self.emit_zero_features && f.is_zero() {
                    continue;
                }
                out.push_str(&match f {
                    Feature::Count(c) => format!(" {}:{}", i + 1, c),
                    Feature::Stat(x) => format!(" {}:{:.2}", i + 1, x),
                });
            }
            out.push('\n');
        }
        Ok(out)
    }

    fn layout(&self, e: &TrainingExample) -> Result<Layout, StrategyError> {
        let w = self.width;
        let tuples_ok = |rows: &[Vec<u64>]| rows.iter().all(|r| r.len() == w);
        if e.sub_window_counts.is_empty() || !tuples_ok(e.sub_window_counts.as_slice()) {
            return Err(StrategyError::InvalidTrainingData);
        }
        let intervals = match &e.summary {
            None => None,
            Some(s) => {
                if s.aggregate.len() != w
                    || s.mean.len() != w
                    || s.std_dev.len() != w
                    || !tuples_ok(s.interval_counts.as_slice())
                {
                    return Err(StrategyError::InvalidTrainingData);
                }
                Some(s.interval_counts.len())
            }
        };
        Ok(Layout {
            sub_windows: e.sub_window_counts.len(),
            intervals,
        })
    }
}

fn flatten(e: &TrainingExample) -> Vec<Feature> {
    let mut out: Vec<Feature> = e
        .sub_window_counts
        .iter()
        .flatten()
        .map(|&c| Feature::Count(c))
        .collect();
    if let Some(s) = &e.summary {
        out.extend(s.aggregate.iter().map(|&c| Feature::Count(c)));
        out.extend(s.interval_counts.iter().flatten().map(|&c| Feature::Count(c)));
        out.extend(s.mean.iter().map(|&x| Feature::Stat(x)));
        out.extend(s.std_dev.iter().map(|&x| Feature::Stat(x)));
        out.push(Feature::Count(s.since_last_fatal));
    }
    out
}
