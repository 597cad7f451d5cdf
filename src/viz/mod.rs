//! Visualization exports built on the map's query API.

mod heatmap;

pub use heatmap::HeatMap;
