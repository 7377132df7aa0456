//! Statistical feature extraction from segmented windows.

mod extractor;
mod fatal;
mod stats;

pub use extractor::FeatureExtractor;
pub use fatal::{since_last_fatal, FatalClock};
pub use stats::{column_sums, mean_and_std, round2};
