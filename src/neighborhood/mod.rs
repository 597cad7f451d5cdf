//! Neighborhood-width decay functions.
//!
//! A width function maps a training iteration to the radius (in
//! topology-distance units) within which neurons are adjusted toward an
//! input. For a fixed configuration the sequence of widths over increasing
//! iterations must be non-increasing.

mod gaussian;
mod linear;

pub use gaussian::GaussianWidth;
pub use linear::LinearDecay;

/// Trait for decaying neighborhood-width functions.
pub trait WidthFunction {
    /// Returns the neighborhood width at the given training iteration.
    fn width(&self, iteration: usize) -> f64;

    /// Informs the function of the expected training length.
    ///
    /// The engine calls this once when the function is injected. The default
    /// implementation ignores it; decays that normalize over the training run
    /// (the linear default) override it.
    fn set_expected_iterations(&mut self, _iterations: usize) {}
}
