//! Reading classifier scores back and scoring them against example labels.

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};

/// One score per non-empty line, in example order.
pub fn parse_scores(text: &str) -> Result<Vec<f64>, PredictionError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            l.trim().parse::<f64>().map_err(|_| PredictionError::InvalidScore {
                line: i + 1,
                value: l.to_string(),
            })
        })
        .collect()
}

/// Non-negative scores are predicted fatal.
pub fn scores_to_labels(scores: &[f64]) -> Vec<bool> {
    scores.iter().map(|&s| s >= 0.0).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Percentages {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub counts: ConfusionCounts,
    pub percentages: Percentages,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Compare predictions with the true labels, pairwise and in order.
pub fn evaluate(actual: &[bool], predicted: &[bool]) -> Result<Evaluation, PredictionError> {
    if actual.len() != predicted.len() {
        return Err(PredictionError::CountMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    let mut c = ConfusionCounts::default();
    for (&a, &p) in actual.iter().zip(predicted) {
        match (a, p) {
            (true, true) => c.true_positives += 1,
            (false, true) => c.false_positives += 1,
            (false, false) => c.true_negatives += 1,
            (true, false) => c.false_negatives += 1,
        }
    }
    let precision = ratio(c.true_positives, c.true_positives + c.false_positives);
    let recall = ratio(c.true_positives, c.true_positives + c.false_negatives);
    let f_measure = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    Ok(Evaluation {
        counts: c,
        percentages: Percentages {
            accuracy: ratio(c.true_positives + c.true_negatives, actual.len()),
            precision,
            recall,
            f_measure,
        },
    })
}
