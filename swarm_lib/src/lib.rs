use options::SimOptions;
use simulation::Simulation;
use watcher::{BoidSample, FlockWatcher, WatcherError};

pub mod boid;
pub mod flock;
pub mod options;
pub mod render;
pub mod simulation;
pub mod vec2;
pub mod watcher;

/// Runs the simulation for `no_iter` ticks without any surface and
/// returns the sampled boid data, saving it according to
/// `options.save_options`.
pub fn run_headless(no_iter: u64, options: &SimOptions) -> Result<Vec<BoidSample>, WatcherError> {
    let mut sim = Simulation::new(options);
    let mut watcher = FlockWatcher::new(options.sample_rate);

    for _ in 0..no_iter {
        sim.step();
        watcher.watch(&sim.flock);
    }

    watcher.pop_data_save(&options.save_options)
}
