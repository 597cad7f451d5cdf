//! Vector distance strategies for query-time comparisons.
//!
//! These metrics are exposed for external consumers of the map. The engine's
//! internal BMU search uses its own fixed squared-Euclidean computation (see
//! [`crate::som::SelfOrganizingMap::distance_to_input`]) and does not route
//! through this trait.

mod euclidean;
mod manhattan;

pub use euclidean::EuclideanMetric;
pub use manhattan::ManhattanMetric;

use crate::error::{Result, TeuvoError};

/// Trait for distance measures between real vectors.
pub trait DistanceMetric {
    /// Computes the distance between two equal-length vectors.
    ///
    /// Returns [`TeuvoError::LengthMismatch`] when the lengths differ.
    fn distance(&self, v0: &[f64], v1: &[f64]) -> Result<f64>;
}

/// Enum for selecting a distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Euclidean distance.
    Euclidean,
    /// Manhattan distance.
    Manhattan,
}

impl MetricKind {
    /// Computes the distance using this metric.
    pub fn compute(&self, v0: &[f64], v1: &[f64]) -> Result<f64> {
        match self {
            MetricKind::Euclidean => EuclideanMetric.distance(v0, v1),
            MetricKind::Manhattan => ManhattanMetric.distance(v0, v1),
        }
    }
}

/// Length precondition shared by all metrics.
fn check_lengths(v0: &[f64], v1: &[f64]) -> Result<()> {
    if v0.len() != v1.len() {
        return Err(TeuvoError::LengthMismatch {
            expected: v0.len(),
            actual: v1.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kinds() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];

        let euclidean = MetricKind::Euclidean.compute(&a, &b).unwrap();
        let manhattan = MetricKind::Manhattan.compute(&a, &b).unwrap();

        assert!((euclidean - 5.0).abs() < 1e-10);
        assert!((manhattan - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_mismatch() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0];

        assert!(MetricKind::Euclidean.compute(&a, &b).is_err());
        assert!(MetricKind::Manhattan.compute(&a, &b).is_err());
    }
}
