//! Error Metric
//!
//! Mean squared error, the evaluation primitive the ablation driver uses to
//! compare vectorizer variants.

use crate::error::FeatureError;

/// Mean of squared pairwise differences between predictions and labels.
///
/// Sequences must be equal-length and non-empty; violating either is a
/// usage error, never a silently-returned NaN or zero.
pub fn mse(predictions: &[f64], labels: &[f64]) -> Result<f64, FeatureError> {
    if predictions.len() != labels.len() {
        return Err(FeatureError::LengthMismatch {
            predictions: predictions.len(),
            labels: labels.len(),
        });
    }
    if predictions.is_empty() {
        return Err(FeatureError::EmptyInput);
    }

    let sum: f64 = predictions
        .iter()
        .zip(labels)
        .map(|(p, l)| (p - l) * (p - l))
        .sum();
    Ok(sum / predictions.len() as f64)
}
