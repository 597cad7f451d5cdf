//! # Teuvo - Self-Organizing Map engine
//!
//! Teuvo trains self-organizing maps (SOMs): unsupervised
//! competitive-learning networks that project high-dimensional inputs onto a
//! low-dimensional neuron grid while preserving topological neighborhoods.
//!
//! ## Overview
//!
//! One [`SelfOrganizingMap`] instance owns one weight matrix. Each training
//! call takes a single input vector, finds the best-matching unit (BMU),
//! pulls it and its grid neighborhood toward the input, and advances the
//! iteration counter. Topology, neighborhood decay and the learning-rate
//! schedule are all pluggable strategies.
//!
//! ## Quick start
//!
//! ```rust
//! use teuvo::{MapConfig, SelfOrganizingMap};
//!
//! let config = MapConfig {
//!     width: 8,
//!     height: 8,
//!     input_length: 2,
//!     iterations: 100,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut map = SelfOrganizingMap::new(&config);
//!
//! for _ in 0..100 {
//!     map.train_with(&[0.3, 0.7]).unwrap();
//! }
//!
//! let bmu = map.best_matching_neuron(&[0.3, 0.7]).unwrap();
//! assert!(map.distance_to_input(bmu, &[0.3, 0.7]) < 0.1);
//! ```
//!
//! ## Architecture
//!
//! - [`som`] - the training engine and learning-rate schedules
//! - [`topology`] - rectangular and hexagonal neuron-distance layouts
//! - [`neighborhood`] - linear and Gaussian neighborhood-width decays
//! - [`metric`] - Euclidean and Manhattan query-time distance strategies
//! - [`storage`] - text-format persistence for trained maps
//! - [`viz`] - heat-map intensity export over the query API

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod metric;
pub mod neighborhood;
pub mod som;
pub mod storage;
pub mod topology;
pub mod viz;

// Re-export commonly used types
pub use config::{GridLayout, MapConfig};
pub use error::{Result, TeuvoError};
pub use metric::{DistanceMetric, EuclideanMetric, ManhattanMetric, MetricKind};
pub use neighborhood::{GaussianWidth, LinearDecay, WidthFunction};
pub use som::{
    ConstantRate, ExponentialRate, LearningSchedule, SelfOrganizingMap, DEFAULT_LEARNING_RATE,
};
pub use storage::{MapFile, MapFormat};
pub use topology::{GridTopology, HexGrid, RectangularGrid};
pub use viz::HeatMap;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_learning_rate() {
        assert!((DEFAULT_LEARNING_RATE - 0.1).abs() < 1e-12);
    }
}
