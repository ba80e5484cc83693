//! Numerically stable softmax and arg-max over class scores.

use crate::core::{ClassifierError, ClassifierResult};
use ndarray::ArrayView1;

/// Converts raw scores into probabilities.
///
/// The maximum score is subtracted before exponentiation and the arithmetic is
/// done in `f64`, so large logits neither overflow nor lose the ordering.
///
/// # Errors
///
/// * `InvalidInput` when `scores` is empty.
/// * `NumericAnomaly` when any score is NaN or infinite.
pub fn softmax(scores: ArrayView1<'_, f32>) -> ClassifierResult<Vec<f64>> {
    if scores.is_empty() {
        return Err(ClassifierError::invalid_input("score vector is empty"));
    }
    if let Some((index, value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(ClassifierError::numeric_anomaly(
            "softmax",
            format!("score {index} is {value}"),
        ));
    }

    let max = scores
        .iter()
        .map(|&s| s as f64)
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (s as f64 - max).exp()).collect();
    // The max term contributes exp(0) = 1, so the sum is never zero.
    let sum: f64 = exps.iter().sum();

    Ok(exps.into_iter().map(|e| e / sum).collect())
}

/// Index and value of the largest element; ties resolve to the lowest index.
pub fn argmax(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, best_v)) if v <= best_v => best,
            _ => Some((i, v)),
        })
}
