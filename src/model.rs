//! Configuration data for the globe component.
//!
//! Everything here is purely visual: markers, colors and lighting feed the
//! painter, none of it changes how dragging or the rotation behaves.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
    /// Dot size as a fraction of the globe radius.
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobeConfig {
    pub markers: Vec<Marker>,
    pub base_color: [f64; 3],
    pub marker_color: [f64; 3],
    pub glow_color: [f64; 3],
    pub dark: bool,
    pub diffuse: f64,
    /// Number of surface sample dots.
    pub map_samples: u32,
    pub map_brightness: f64,
}

impl GlobeConfig {
    /// Footprint-dashboard defaults: office sites sized by reported headcount.
    pub fn sustainability_default() -> Self {
        Self {
            markers: vec![
                Marker { lat: 37.7595, lon: -122.4367, size: 0.03 }, // San Francisco
                Marker { lat: 40.7128, lon: -74.0060, size: 0.1 },   // New York
                Marker { lat: 51.5074, lon: -0.1278, size: 0.05 },   // London
                Marker { lat: 35.6762, lon: 139.6503, size: 0.08 },  // Tokyo
                Marker { lat: 12.9716, lon: 77.5946, size: 0.08 },   // Bengaluru
            ],
            base_color: [0.3, 0.3, 0.3],
            marker_color: [0.1, 0.8, 0.5],
            glow_color: [0.1, 0.8, 0.5],
            dark: true,
            diffuse: 1.2,
            map_samples: 16_000,
            map_brightness: 6.0,
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self::sustainability_default()
    }
}
