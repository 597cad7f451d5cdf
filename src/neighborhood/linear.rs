//! Linear neighborhood-width decay.

use crate::neighborhood::WidthFunction;

/// Linear decay from an initial width down to zero at the expected iteration
/// count: `initial * (1 - t / expected)`.
///
/// The width is deliberately not clamped: past the expected iteration count
/// it goes negative, the engine's strictly-less-than membership test then
/// never passes, and training degrades to adjusting only the winning neuron.
#[derive(Debug, Clone, Copy)]
pub struct LinearDecay {
    initial_width: f64,
    expected_iterations: usize,
}

impl LinearDecay {
    /// Creates a linear decay from `initial_width` over `expected_iterations`.
    pub fn new(initial_width: f64, expected_iterations: usize) -> Self {
        Self {
            initial_width,
            expected_iterations,
        }
    }

    /// Returns the width at iteration zero.
    #[inline]
    pub fn initial_width(&self) -> f64 {
        self.initial_width
    }
}

impl WidthFunction for LinearDecay {
    fn width(&self, iteration: usize) -> f64 {
        self.initial_width * (1.0 - iteration as f64 / self.expected_iterations as f64)
    }

    fn set_expected_iterations(&mut self, iterations: usize) {
        self.expected_iterations = iterations;
    }
}
