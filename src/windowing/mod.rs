//! Partitioning of an ordered event stream into windows, sub-windows and intervals.

mod segmenter;

pub use segmenter::{intervals, intervals_per_sub_window, segment, sub_window_delta};
