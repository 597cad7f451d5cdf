//! Hexagonal grid topology.

use crate::topology::GridTopology;

/// A hexagonal offset grid of `side * side` neurons, row-major order.
///
/// Row and column deltas between two neurons map onto axial hex coordinates:
/// when the deltas share a sign the two axes accumulate (`|dx + dy|`),
/// otherwise steps along one axis can absorb steps along the other
/// (`max(|dx|, |dy|)`).
#[derive(Debug, Clone, Copy)]
pub struct HexGrid {
    side: usize,
}

impl HexGrid {
    /// Creates a hexagonal topology for a square grid of the given side length.
    pub fn new(side: usize) -> Self {
        Self { side }
    }

    /// Returns the side length of the grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }
}

/// Zero counts as positive here; the branch below only cares whether the
/// deltas pull in the same direction.
#[inline]
fn sign(n: i64) -> i64 {
    if n >= 0 {
        1
    } else {
        -1
    }
}

impl GridTopology for HexGrid {
    fn neuron_distance(&self, neuron0: usize, neuron1: usize) -> f64 {
        let side = self.side as i64;
        let (row0, col0) = (neuron0 as i64 / side, neuron0 as i64 % side);
        let (row1, col1) = (neuron1 as i64 / side, neuron1 as i64 % side);

        let dx = row1 - row0;
        let dy = col1 - col0;

        let distance = if sign(dx) == sign(dy) {
            (dx + dy).abs()
        } else {
            dx.abs().max(dy.abs())
        };

        distance as f64
    }
}
