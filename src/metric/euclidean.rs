//! Euclidean distance metric.

use crate::error::Result;
use crate::metric::{check_lengths, DistanceMetric};

/// Euclidean distance: the square root of the sum of the squares of the
/// component-wise differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMetric;

impl DistanceMetric for EuclideanMetric {
    fn distance(&self, v0: &[f64], v1: &[f64]) -> Result<f64> {
        check_lengths(v0, v1)?;

        let sum: f64 = v0
            .iter()
            .zip(v1.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();

        Ok(sum.sqrt())
    }
}
