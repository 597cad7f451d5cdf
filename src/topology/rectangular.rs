//! Rectangular grid topology.

use crate::topology::GridTopology;

/// A rectangular grid of neurons, row-major order.
///
/// The distance between two neurons is the Chebyshev distance between their
/// grid coordinates, so neighborhoods of adjustment form square rings around
/// the winning neuron.
#[derive(Debug, Clone, Copy)]
pub struct RectangularGrid {
    width: usize,
}

impl RectangularGrid {
    /// Creates a rectangular topology for a grid of the given width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Converts a neuron index to its (row, col) grid coordinates.
    #[inline]
    fn coords(&self, neuron: usize) -> (usize, usize) {
        (neuron / self.width, neuron % self.width)
    }
}

impl GridTopology for RectangularGrid {
    fn neuron_distance(&self, neuron0: usize, neuron1: usize) -> f64 {
        let (row0, col0) = self.coords(neuron0);
        let (row1, col1) = self.coords(neuron1);

        let dr = (row0 as i64 - row1 as i64).abs();
        let dc = (col0 as i64 - col1 as i64).abs();

        dr.max(dc) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_only_for_same_neuron() {
        let grid = RectangularGrid::new(5);
        for a in 0..25 {
            for b in 0..25 {
                let d = grid.neuron_distance(a, b);
                if a == b {
                    assert!(d.abs() < 1e-12);
                } else {
                    assert!(d >= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let grid = RectangularGrid::new(5);
        for a in 0..25 {
            for b in 0..25 {
                let d_ab = grid.neuron_distance(a, b);
                let d_ba = grid.neuron_distance(b, a);
                assert!((d_ab - d_ba).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_chebyshev_rings() {
        let grid = RectangularGrid::new(5);
        // Neuron 12 sits at (2, 2) on a 5-wide grid.
        // (2, 3) is one step right.
        assert!((grid.neuron_distance(12, 13) - 1.0).abs() < 1e-12);
        // (1, 1) is one diagonal step.
        assert!((grid.neuron_distance(12, 6) - 1.0).abs() < 1e-12);
        // (0, 0) is two diagonal steps.
        assert!((grid.neuron_distance(12, 0) - 2.0).abs() < 1e-12);
        // (0, 4): dr = 2, dc = 2.
        assert!((grid.neuron_distance(12, 4) - 2.0).abs() < 1e-12);
    }
}
