//! Learning-rate schedules.

/// The default learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Trait for learning-rate schedules over training iterations.
pub trait LearningSchedule {
    /// Returns the learning rate (alpha in most equations) at a given
    /// training iteration.
    fn rate(&self, iteration: usize) -> f64;
}

/// A constant learning rate, the engine default.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRate {
    rate: f64,
}

impl ConstantRate {
    /// Creates a constant schedule with the given rate.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for ConstantRate {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE)
    }
}

impl LearningSchedule for ConstantRate {
    fn rate(&self, _iteration: usize) -> f64 {
        self.rate
    }
}

/// Exponential decay from an initial to a final rate over an expected number
/// of iterations: `initial * (final / initial)^(t / expected)`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialRate {
    initial: f64,
    final_rate: f64,
    expected_iterations: usize,
}

impl ExponentialRate {
    /// Creates an exponential schedule decaying from `initial` to
    /// `final_rate` over `expected_iterations`.
    pub fn new(initial: f64, final_rate: f64, expected_iterations: usize) -> Self {
        Self {
            initial,
            final_rate,
            expected_iterations,
        }
    }
}

impl LearningSchedule for ExponentialRate {
    fn rate(&self, iteration: usize) -> f64 {
        let t = iteration as f64 / self.expected_iterations as f64;
        self.initial * (self.final_rate / self.initial).powf(t)
    }
}
