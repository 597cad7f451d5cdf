//! The Self-Organizing Map engine.

use crate::config::{GridLayout, MapConfig};
use crate::error::{Result, TeuvoError};
use crate::neighborhood::{LinearDecay, WidthFunction};
use crate::som::schedule::{ConstantRate, LearningSchedule};
use crate::topology::{GridTopology, HexGrid, RectangularGrid};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Neurons whose squared distance to the input is within this epsilon of the
/// minimum count as tied for best match during training.
const BMU_TIE_EPSILON: f64 = 1.0e-6;

/// A Self-Organizing Map: a fixed grid of neurons whose weight vectors are
/// trained in place, one input vector per call.
///
/// The engine owns the weight matrix exclusively. It is single-threaded and
/// provides no locking: a consumer reading weights concurrently with an
/// in-progress training call from another thread must serialize access
/// externally or accept stale reads.
pub struct SelfOrganizingMap {
    /// Grid width in neurons.
    width: usize,
    /// Grid height in neurons.
    height: usize,
    /// Length of the input vectors.
    input_length: usize,
    /// Expected training length; only normalizes the default width decay.
    expected_iterations: usize,
    /// Current training iteration. Monotonic, never reset.
    time: usize,
    /// Neuron index -> weight vector, row-major grid order.
    weights: Vec<Vec<f64>>,
    topology: Box<dyn GridTopology>,
    width_fn: Box<dyn WidthFunction>,
    schedule: Box<dyn LearningSchedule>,
    /// Tie-breaking RNG; seedable for reproducible training runs.
    rng: ChaCha8Rng,
}

impl SelfOrganizingMap {
    /// Creates a new map with every weight component drawn independently
    /// from a uniform [0, 1) distribution.
    pub fn new(config: &MapConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let weights: Vec<Vec<f64>> = (0..config.neuron_count())
            .map(|_| (0..config.input_length).map(|_| rng.gen::<f64>()).collect())
            .collect();

        let topology: Box<dyn GridTopology> = match config.layout {
            GridLayout::Rectangular => Box::new(RectangularGrid::new(config.width)),
            GridLayout::Hexagonal => Box::new(HexGrid::new(config.width)),
        };

        debug!(
            "initialized {}x{} map, {} weights per neuron",
            config.width, config.height, config.input_length
        );

        Self {
            width: config.width,
            height: config.height,
            input_length: config.input_length,
            expected_iterations: config.iterations,
            time: 0,
            weights,
            topology,
            width_fn: Box::new(LinearDecay::new(
                config.initial_neighborhood_width(),
                config.iterations,
            )),
            schedule: Box::new(ConstantRate::new(config.learning_rate)),
            rng,
        }
    }

    /// Reconstructs a map from a pre-parsed weight matrix, as produced by
    /// the map file reader.
    ///
    /// Fails with [`TeuvoError::InvalidMapFormat`] when the matrix does not
    /// cover `width * height` neurons or any row is not `input_length` long.
    pub fn from_weights(
        weights: Vec<Vec<f64>>,
        width: usize,
        height: usize,
        input_length: usize,
        expected_iterations: usize,
    ) -> Result<Self> {
        if weights.len() != width * height {
            return Err(TeuvoError::InvalidMapFormat(format!(
                "expected {} weight vectors for a {}x{} grid, found {}",
                width * height,
                width,
                height,
                weights.len()
            )));
        }
        for (neuron, row) in weights.iter().enumerate() {
            if row.len() != input_length {
                return Err(TeuvoError::InvalidMapFormat(format!(
                    "weight vector {} has {} components, expected {}",
                    neuron,
                    row.len(),
                    input_length
                )));
            }
        }

        let initial_width = (width.min(height) / 3) as f64;

        Ok(Self {
            width,
            height,
            input_length,
            expected_iterations,
            time: 0,
            weights,
            topology: Box::new(RectangularGrid::new(width)),
            width_fn: Box::new(LinearDecay::new(initial_width, expected_iterations)),
            schedule: Box::new(ConstantRate::default()),
            rng: ChaCha8Rng::from_entropy(),
        })
    }

    /// Replaces the grid topology.
    pub fn with_topology(mut self, topology: Box<dyn GridTopology>) -> Self {
        self.topology = topology;
        self
    }

    /// Replaces the neighborhood-width function. The expected iteration
    /// count is forwarded to the new function before first use.
    pub fn with_width_function(mut self, mut width_fn: Box<dyn WidthFunction>) -> Self {
        width_fn.set_expected_iterations(self.expected_iterations);
        self.width_fn = width_fn;
        self
    }

    /// Replaces the learning-rate schedule.
    pub fn with_schedule(mut self, schedule: Box<dyn LearningSchedule>) -> Self {
        self.schedule = schedule;
        self
    }

    /// Trains the map on a single input vector.
    ///
    /// Finds the best-matching unit (ties within 1e-6 broken uniformly at
    /// random), moves its weights toward the input, does the same for every
    /// neuron whose grid distance to the winner is strictly below the
    /// current neighborhood width, then advances the iteration counter.
    ///
    /// Calling this more often than the expected iteration count is legal:
    /// the default linear width goes negative, the neighborhood test never
    /// passes, and only the winning neuron keeps adjusting.
    pub fn train_with(&mut self, input: &[f64]) -> Result<()> {
        self.check_input(input)?;

        let winner = self.best_match_during_training(input);
        self.adjust_neuron(winner, input);
        self.adjust_neighbors_of(winner, input);
        self.time += 1;
        Ok(())
    }

    /// Finds the neuron whose weight vector is nearest the input under
    /// squared Euclidean distance.
    ///
    /// Pure query: ties resolve deterministically to the lowest index, with
    /// no randomization.
    pub fn best_matching_neuron(&self, input: &[f64]) -> Result<usize> {
        self.check_input(input)?;

        let mut best = 0;
        let mut lowest = self.distance_to_input(0, input);
        for neuron in 1..self.neuron_count() {
            let distance = self.distance_to_input(neuron, input);
            if distance < lowest {
                lowest = distance;
                best = neuron;
            }
        }
        Ok(best)
    }

    /// Squared Euclidean distance from a neuron's weight vector to an input.
    ///
    /// This is the same distance signal the BMU search uses; external
    /// consumers (heat maps) read it without paying for a square root. No
    /// length validation is performed here; it is the caller's
    /// responsibility. Panics if `neuron` is out of range.
    pub fn distance_to_input(&self, neuron: usize, input: &[f64]) -> f64 {
        self.weights[neuron]
            .iter()
            .zip(input.iter())
            .map(|(w, x)| (x - w) * (x - w))
            .sum()
    }

    /// Returns one component of a neuron's weight vector.
    #[inline]
    pub fn weight(&self, neuron: usize, index: usize) -> f64 {
        self.weights[neuron][index]
    }

    /// Returns a neuron's full weight vector.
    #[inline]
    pub fn weight_vector(&self, neuron: usize) -> &[f64] {
        &self.weights[neuron]
    }

    /// Returns the total number of neurons.
    #[inline]
    pub fn neuron_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns the (width, height) of the neuron grid.
    #[inline]
    pub fn grid_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the expected input vector length.
    #[inline]
    pub fn input_length(&self) -> usize {
        self.input_length
    }

    /// Returns the expected training iteration count.
    #[inline]
    pub fn expected_iterations(&self) -> usize {
        self.expected_iterations
    }

    /// Returns the number of completed training calls.
    #[inline]
    pub fn iteration(&self) -> usize {
        self.time
    }

    /// BMU search for training: collects every neuron within
    /// [`BMU_TIE_EPSILON`] of the minimum distance and picks one uniformly
    /// at random, avoiding systematic bias toward low-index neurons on
    /// exact ties.
    fn best_match_during_training(&mut self, input: &[f64]) -> usize {
        let mut lowest = self.distance_to_input(0, input);
        let mut ties = vec![0];

        for neuron in 1..self.neuron_count() {
            let distance = self.distance_to_input(neuron, input);
            if (distance - lowest).abs() < BMU_TIE_EPSILON {
                ties.push(neuron);
            } else if distance < lowest {
                lowest = distance;
                ties.clear();
                ties.push(neuron);
            }
        }

        ties[self.rng.gen_range(0..ties.len())]
    }

    /// Moves one neuron's weights toward the input by the current rate.
    fn adjust_neuron(&mut self, neuron: usize, input: &[f64]) {
        let rate = self.schedule.rate(self.time);
        for (w, x) in self.weights[neuron].iter_mut().zip(input.iter()) {
            *w += rate * (x - *w);
        }
    }

    /// Adjusts every neuron in the winner's neighborhood. The width is
    /// evaluated at the current iteration, before the counter advances.
    fn adjust_neighbors_of(&mut self, winner: usize, input: &[f64]) {
        let width = self.width_fn.width(self.time);
        for neuron in 0..self.neuron_count() {
            if neuron != winner && self.topology.neuron_distance(winner, neuron) < width {
                self.adjust_neuron(neuron, input);
            }
        }
    }

    /// Length precondition for the training and query entry points.
    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_length {
            return Err(TeuvoError::LengthMismatch {
                expected: self.input_length,
                actual: input.len(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for SelfOrganizingMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfOrganizingMap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("input_length", &self.input_length)
            .field("expected_iterations", &self.expected_iterations)
            .field("time", &self.time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::GaussianWidth;

    fn test_config() -> MapConfig {
        MapConfig {
            width: 4,
            height: 4,
            input_length: 3,
            iterations: 100,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_construction() {
        let map = SelfOrganizingMap::new(&test_config());
        assert_eq!(map.neuron_count(), 16);
        assert_eq!(map.grid_size(), (4, 4));
        assert_eq!(map.input_length(), 3);
        assert_eq!(map.expected_iterations(), 100);
        assert_eq!(map.iteration(), 0);
    }

    #[test]
    fn test_weights_initialized_in_unit_interval() {
        let map = SelfOrganizingMap::new(&test_config());
        for neuron in 0..map.neuron_count() {
            for index in 0..map.input_length() {
                let w = map.weight(neuron, index);
                assert!((0.0..1.0).contains(&w));
            }
        }
    }

    #[test]
    fn test_seeded_maps_are_identical() {
        let a = SelfOrganizingMap::new(&test_config());
        let b = SelfOrganizingMap::new(&test_config());
        for neuron in 0..a.neuron_count() {
            assert_eq!(a.weight_vector(neuron), b.weight_vector(neuron));
        }
    }

    #[test]
    fn test_train_rejects_wrong_length_without_mutation() {
        let mut map = SelfOrganizingMap::new(&test_config());
        let before: Vec<Vec<f64>> = (0..map.neuron_count())
            .map(|n| map.weight_vector(n).to_vec())
            .collect();

        let result = map.train_with(&[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(TeuvoError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));

        assert_eq!(map.iteration(), 0);
        for (neuron, row) in before.iter().enumerate() {
            assert_eq!(map.weight_vector(neuron), row.as_slice());
        }
    }

    #[test]
    fn test_query_rejects_wrong_length() {
        let map = SelfOrganizingMap::new(&test_config());
        assert!(map.best_matching_neuron(&[1.0]).is_err());
    }

    #[test]
    fn test_train_increments_time() {
        let mut map = SelfOrganizingMap::new(&test_config());
        map.train_with(&[0.5, 0.5, 0.5]).unwrap();
        map.train_with(&[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(map.iteration(), 2);
    }

    #[test]
    fn test_query_ties_resolve_to_lowest_index() {
        // Two neurons with identical weights: the pure query must always
        // report the first one.
        let weights = vec![
            vec![0.5, 0.5],
            vec![0.5, 0.5],
            vec![9.0, 9.0],
            vec![9.0, 9.0],
        ];
        let map = SelfOrganizingMap::from_weights(weights, 2, 2, 2, 10).unwrap();
        assert_eq!(map.best_matching_neuron(&[0.5, 0.5]).unwrap(), 0);
    }

    #[test]
    fn test_winner_moves_toward_input() {
        let weights = vec![vec![0.0], vec![10.0], vec![10.0], vec![10.0]];
        let mut map = SelfOrganizingMap::from_weights(weights, 2, 2, 1, 10).unwrap();

        map.train_with(&[1.0]).unwrap();

        // floor(2 / 3) = 0 initial width, so only the winner adjusts:
        // 0.0 + 0.1 * (1.0 - 0.0) = 0.1.
        assert!((map.weight(0, 0) - 0.1).abs() < 1e-12);
        assert!((map.weight(1, 0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_neighbors_adjust_within_width() {
        // 6x6 grid gives initial width floor(6/3) = 2: neurons at Chebyshev
        // distance 1 from the winner adjust, distance 2 and beyond do not.
        let mut weights = vec![vec![5.0]; 36];
        weights[0] = vec![0.0];
        let mut map = SelfOrganizingMap::from_weights(weights, 6, 6, 1, 100).unwrap();

        map.train_with(&[0.0]).unwrap();

        // Winner (0,0) and its ring at distance 1 moved.
        assert!(map.weight(0, 0) < 1e-12);
        assert!((map.weight(1, 0) - 4.5).abs() < 1e-12); // (0,1)
        assert!((map.weight(6, 0) - 4.5).abs() < 1e-12); // (1,0)
        assert!((map.weight(7, 0) - 4.5).abs() < 1e-12); // (1,1)
        // Distance 2 is not strictly less than the width of 2.
        assert!((map.weight(2, 0) - 5.0).abs() < 1e-12); // (0,2)
        assert!((map.weight(14, 0) - 5.0).abs() < 1e-12); // (2,2)
    }

    #[test]
    fn test_training_past_expected_iterations_is_legal() {
        let config = MapConfig {
            width: 6,
            height: 6,
            input_length: 1,
            iterations: 2,
            seed: Some(7),
            ..Default::default()
        };
        let mut map = SelfOrganizingMap::new(&config);

        for _ in 0..10 {
            map.train_with(&[0.5]).unwrap();
        }
        assert_eq!(map.iteration(), 10);

        // Width is now negative: a further call adjusts the winner only.
        let before: Vec<f64> = (0..map.neuron_count()).map(|n| map.weight(n, 0)).collect();
        map.train_with(&[50.0]).unwrap();
        let changed = (0..map.neuron_count())
            .filter(|&n| (map.weight(n, 0) - before[n]).abs() > 1e-12)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_from_weights_validates_matrix() {
        // Wrong neuron count.
        let result = SelfOrganizingMap::from_weights(vec![vec![0.0]; 3], 2, 2, 1, 10);
        assert!(matches!(result, Err(TeuvoError::InvalidMapFormat(_))));

        // Wrong row length.
        let result =
            SelfOrganizingMap::from_weights(vec![vec![0.0], vec![0.0, 1.0]], 2, 1, 1, 10);
        assert!(matches!(result, Err(TeuvoError::InvalidMapFormat(_))));
    }

    #[test]
    fn test_gaussian_width_injection() {
        let mut map = SelfOrganizingMap::new(&test_config())
            .with_width_function(Box::new(GaussianWidth::new(100.0)));
        // The Gaussian magnitude is a tiny coefficient, far below any grid
        // distance, so only winners ever adjust; training must still run.
        for _ in 0..5 {
            map.train_with(&[0.2, 0.4, 0.6]).unwrap();
        }
        assert_eq!(map.iteration(), 5);
    }

    #[test]
    fn test_hex_topology_injection() {
        let config = MapConfig {
            width: 7,
            height: 7,
            input_length: 2,
            iterations: 50,
            seed: Some(3),
            layout: GridLayout::Hexagonal,
            ..Default::default()
        };
        let mut map = SelfOrganizingMap::new(&config);
        for _ in 0..50 {
            map.train_with(&[0.3, 0.7]).unwrap();
        }
        assert_eq!(map.iteration(), 50);

        // Explicit injection behaves the same way.
        let mut map = SelfOrganizingMap::new(&test_config())
            .with_topology(Box::new(HexGrid::new(4)));
        map.train_with(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(map.iteration(), 1);
    }
}
