//! Heat-map intensity grid over neuron distances.

use crate::error::{Result, TeuvoError};
use crate::som::SelfOrganizingMap;
use image::{GrayImage, Luma};

/// A per-neuron intensity grid measuring how near each neuron's weight
/// vector is to a sample input.
///
/// Consumes only the map's query API ([`SelfOrganizingMap::distance_to_input`]
/// and the shape accessors), so it can be rebuilt against any engine with the
/// same grid. The maximum observed distance is kept across updates, so the
/// intensity scale stays stable while a map is being watched during training.
#[derive(Debug, Clone)]
pub struct HeatMap {
    width: usize,
    height: usize,
    intensities: Vec<u8>,
    max_distance: f64,
}

impl HeatMap {
    /// Creates an all-dark heat map shaped like the given map's grid.
    pub fn new(map: &SelfOrganizingMap) -> Self {
        let (width, height) = map.grid_size();
        Self {
            width,
            height,
            intensities: vec![0; width * height],
            max_distance: 0.0,
        }
    }

    /// Recomputes the intensities against a sample input vector.
    ///
    /// Neurons nearer the sample come out brighter. Fails with a length
    /// mismatch when the sample does not fit the map's input size.
    pub fn update(&mut self, map: &SelfOrganizingMap, sample: &[f64]) -> Result<()> {
        if sample.len() != map.input_length() {
            return Err(TeuvoError::LengthMismatch {
                expected: map.input_length(),
                actual: sample.len(),
            });
        }

        let distances: Vec<f64> = (0..map.neuron_count())
            .map(|neuron| map.distance_to_input(neuron, sample))
            .collect();

        self.max_distance = distances.iter().copied().fold(self.max_distance, f64::max);
        let span = self.max_distance;

        for (intensity, distance) in self.intensities.iter_mut().zip(distances.iter()) {
            *intensity = if span > 0.0 {
                (255.0 - 255.0 * (distance / span)).clamp(0.0, 255.0) as u8
            } else {
                255
            };
        }
        Ok(())
    }

    /// Returns the intensity of one neuron, 255 for nearest.
    #[inline]
    pub fn intensity(&self, neuron: usize) -> u8 {
        self.intensities[neuron]
    }

    /// Renders the grid as a grayscale image, one pixel per neuron.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([self.intensities[y as usize * self.width + x as usize]])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;

    fn test_map() -> SelfOrganizingMap {
        let weights = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
        SelfOrganizingMap::from_weights(weights, 2, 2, 2, 10).unwrap()
    }

    #[test]
    fn test_nearest_neuron_is_brightest() {
        let map = test_map();
        let mut heat = HeatMap::new(&map);
        heat.update(&map, &[0.0, 0.0]).unwrap();

        assert_eq!(heat.intensity(0), 255);
        for neuron in 1..4 {
            assert!(heat.intensity(neuron) < heat.intensity(neuron - 1));
        }
    }

    #[test]
    fn test_max_persists_across_updates() {
        let map = test_map();
        let mut heat = HeatMap::new(&map);

        heat.update(&map, &[10.0, 10.0]).unwrap();
        let far_intensity = heat.intensity(0);

        // A nearby sample must not rescale against a smaller maximum.
        heat.update(&map, &[0.0, 0.0]).unwrap();
        assert_eq!(heat.intensity(0), 255);
        assert!(far_intensity < 255);
    }

    #[test]
    fn test_sample_length_is_validated() {
        let map = test_map();
        let mut heat = HeatMap::new(&map);
        assert!(heat.update(&map, &[1.0]).is_err());
    }

    #[test]
    fn test_image_shape() {
        let map = test_map();
        let mut heat = HeatMap::new(&map);
        heat.update(&map, &[0.0, 0.0]).unwrap();

        let image = heat.to_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0).0[0], 255);
    }
}
