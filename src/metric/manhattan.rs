//! Manhattan distance metric.

use crate::error::Result;
use crate::metric::{check_lengths, DistanceMetric};

/// Manhattan distance: the sum of the absolute component-wise differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanMetric;

impl DistanceMetric for ManhattanMetric {
    fn distance(&self, v0: &[f64], v1: &[f64]) -> Result<f64> {
        check_lengths(v0, v1)?;

        Ok(v0.iter().zip(v1.iter()).map(|(a, b)| (a - b).abs()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = [1.0, 2.5, -3.0];
        let dist = ManhattanMetric.distance(&v, &v).unwrap();
        assert!(dist.abs() < 1e-10);
    }

    #[test]
    fn test_taxicab() {
        let a = [0.0, 0.0];
        let b = [3.0, -4.0];
        let dist = ManhattanMetric.distance(&a, &b).unwrap();
        assert!((dist - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let a = [1.0, -2.0, 4.5];
        let b = [0.5, 3.0, -1.0];
        let d_ab = ManhattanMetric.distance(&a, &b).unwrap();
        let d_ba = ManhattanMetric.distance(&b, &a).unwrap();
        assert!((d_ab - d_ba).abs() < 1e-10);
        assert!(d_ab > 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let a = [1.0];
        let b = [1.0, 2.0];
        assert!(ManhattanMetric.distance(&a, &b).is_err());
    }
}
