//! The Self-Organizing Map training engine.
//!
//! One engine instance owns one weight matrix and trains it in place, one
//! input vector per call. Topology, neighborhood-width decay and the
//! learning-rate schedule are injected strategies.

mod map;
mod schedule;

pub use map::SelfOrganizingMap;
pub use schedule::{ConstantRate, ExponentialRate, LearningSchedule, DEFAULT_LEARNING_RATE};
