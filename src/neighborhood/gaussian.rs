//! Gaussian neighborhood-width decay.

use crate::neighborhood::WidthFunction;

/// Gaussian-shaped decay: the normal density
/// `(1 / (sigma * sqrt(2 * pi))) * exp(-t^2 / (2 * sigma^2))` evaluated over
/// non-negative iterations.
///
/// Strictly decreasing as the iteration moves away from zero, but NOT
/// normalized to the grid size: the magnitude is a unit-less coefficient,
/// not a grid-distance radius. Callers must scale it, or only inject it into
/// an engine designed for that scale.
#[derive(Debug, Clone, Copy)]
pub struct GaussianWidth {
    sigma: f64,
    expected_iterations: usize,
}

impl GaussianWidth {
    /// Creates a Gaussian width function with the given standard deviation.
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            expected_iterations: 0,
        }
    }

    /// Returns the standard deviation.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the expected iteration count set on injection.
    ///
    /// The Gaussian shape does not depend on it; it is kept for interface
    /// parity with decays that do.
    #[inline]
    pub fn expected_iterations(&self) -> usize {
        self.expected_iterations
    }
}

impl WidthFunction for GaussianWidth {
    fn width(&self, iteration: usize) -> f64 {
        let t = iteration as f64;
        let coefficient = 1.0 / (self.sigma * (2.0 * std::f64::consts::PI).sqrt());
        coefficient * (-(t * t) / (2.0 * self.sigma * self.sigma)).exp()
    }

    fn set_expected_iterations(&mut self, iterations: usize) {
        self.expected_iterations = iterations;
    }
}
