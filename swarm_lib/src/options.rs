use serde::{Deserialize, Serialize};

/// The three classic flocking behaviour weights.
///
/// Held by the flock and safe to adjust between ticks, e.g. from the UI
/// sliders, without invalidating any boid state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
}

impl Default for SteeringWeights {
    fn default() -> Self {
        SteeringWeights {
            separation: 5.1,
            alignment: 1.55,
            cohesion: 2.35,
        }
    }
}

/// Extent of the simulation area, x in [0, width], y in [0, height] with
/// the origin at the top-left corner of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Bounds { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct SimOptions {
    /// boids seeded at startup and on restart
    pub init_boids: usize,
    pub bounds: Bounds,
    pub weights: SteeringWeights,
    /// fixed seed for reproducible runs, fresh entropy when `None`
    pub seed: Option<u64>,
    /// the watcher records every nth tick
    pub sample_rate: u64,
    pub save_options: SaveOptions,
}

impl Default for SimOptions {
    fn default() -> Self {
        SimOptions {
            init_boids: 40,
            bounds: Bounds::new(480., 480.),
            weights: Default::default(),
            seed: None,
            sample_rate: 1,
            save_options: SaveOptions {
                save_locations: false,
                save_locations_path: Some("./".to_owned()),
                save_locations_timestamp: true,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveOptions {
    pub save_locations: bool,
    pub save_locations_path: Option<String>,
    pub save_locations_timestamp: bool,
}
