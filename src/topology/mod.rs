//! Grid layouts and neuron-to-neuron distances.
//!
//! A topology turns a pair of neuron indices into a spatial distance over
//! their *grid positions* (not their weight vectors). The training engine
//! uses it exclusively to decide neighborhood membership around a winning
//! neuron.

mod hexagonal;
mod rectangular;

pub use hexagonal::HexGrid;
pub use rectangular::RectangularGrid;

/// Trait for topology-specific distances between neuron grid positions.
///
/// Implementations must be symmetric: `neuron_distance(a, b)` must equal
/// `neuron_distance(b, a)` for all valid indices. The engine only tests
/// neighborhood membership in one direction, so asymmetric layouts are
/// unsupported.
pub trait GridTopology {
    /// Computes the layout-aware distance between two neuron indices.
    fn neuron_distance(&self, neuron0: usize, neuron1: usize) -> f64;
}
