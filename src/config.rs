//! Configuration for the Teuvo SOM engine.

use serde::{Deserialize, Serialize};

/// The grid layout used to compute neuron-to-neuron distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLayout {
    /// Rectangular grid with Chebyshev neuron distance.
    #[default]
    Rectangular,
    /// Hexagonal offset grid. The grid is treated as square: the configured
    /// width is used as the hex side length.
    Hexagonal,
}

/// Self-Organizing Map configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Grid width in neurons.
    /// Default: 10.
    pub width: usize,

    /// Grid height in neurons.
    /// Default: 10.
    pub height: usize,

    /// Length of the input vectors the map will be trained on.
    /// Default: 2.
    pub input_length: usize,

    /// Expected number of training iterations.
    ///
    /// Only used to normalize the default linear neighborhood-width decay;
    /// training may legally continue past this count.
    /// Default: 1000.
    pub iterations: usize,

    /// Learning rate applied on every weight adjustment.
    /// Default: 0.1.
    pub learning_rate: f64,

    /// Grid layout.
    /// Default: rectangular.
    pub layout: GridLayout,

    /// Random seed for reproducibility.
    /// Default: None (random).
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            input_length: 2,
            iterations: 1000,
            learning_rate: crate::som::DEFAULT_LEARNING_RATE,
            layout: GridLayout::Rectangular,
            seed: None,
        }
    }
}

impl MapConfig {
    /// Returns the total number of neurons in the map.
    #[inline]
    pub fn neuron_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns the initial neighborhood width for the default linear decay:
    /// a third of the smaller grid dimension, truncated.
    #[inline]
    pub fn initial_neighborhood_width(&self) -> f64 {
        (self.width.min(self.height) / 3) as f64
    }
}
