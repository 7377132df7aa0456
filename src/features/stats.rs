//! Per-severity mean and population standard deviation over count rows.

use crate::error::StrategyError;
use crate::events::SeverityCounts;
use ndarray::{Array2, Axis};

/// Round to two decimals, the precision the classifier sees.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Column-wise mean and standard deviation (ddof = 0) of `rows`, each `width`
/// wide. No rows gives all zeros.
pub fn mean_and_std(
    rows: &[SeverityCounts],
    width: usize,
) -> Result<(Vec<f64>, Vec<f64>), StrategyError> {
    if rows.is_empty() {
        return Ok((vec![0.0; width], vec![0.0; width]));
    }
    let flat: Vec<f64> = rows.iter().flatten().map(|&c| c as f64).collect();
    let m = Array2::from_shape_vec((rows.len(), width), flat)
        .map_err(|_| StrategyError::Malformed)?;

    let mean = m
        .mean_axis(Axis(0))
        .ok_or(StrategyError::Malformed)?
        .iter()
        .map(|&x| round2(x))
        .collect();
    let std = m.std_axis(Axis(0), 0.0).iter().map(|&x| round2(x)).collect();
    Ok((mean, std))
}

/// Column-wise sum of `rows`.
pub fn column_sums(rows: &[SeverityCounts], width: usize) -> SeverityCounts {
    let mut out = vec![0; width];
    for row in rows {
        for (acc, c) in out.iter_mut().zip(row) {
            *acc += c;
        }
    }
    out
}
