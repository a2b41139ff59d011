use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    flock::{Flock, TickOutcome},
    options::{Bounds, SimOptions},
    render::{self, Color, Surface},
};

/// Owning context for one independent simulation: the flock, its bounds
/// and the random source used to spawn boids.
///
/// There is deliberately no process-wide state; two `Simulation`s never
/// interfere, which also keeps tests free of singletons.
pub struct Simulation {
    pub flock: Flock,
    pub bounds: Bounds,
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Builds a simulation pre-seeded with `options.init_boids` boids at
    /// uniformly random positions within the bounds.
    pub fn new(options: &SimOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };

        let mut sim = Simulation {
            flock: Flock::new(options.weights),
            bounds: options.bounds,
            rng,
        };
        sim.reseed(options.init_boids);
        sim
    }

    /// One physics step; no surface involved.
    pub fn step(&mut self) -> TickOutcome {
        self.flock.tick(self.bounds)
    }

    /// One full frame: clear, simulate, render, present, in that order,
    /// exactly once per call.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> TickOutcome {
        surface.clear(Color::BLACK);
        let outcome = self.step();
        render::render_flock(&self.flock, surface);
        surface.present();
        outcome
    }

    /// Spawns a single boid, e.g. in response to a touch sample.
    pub fn add_boid(&mut self, x: f32, y: f32) {
        self.flock.add_boid(x, y, &mut self.rng);
    }

    pub fn clear(&mut self) {
        self.flock.clear();
    }

    /// Empties the flock and repopulates it with `count` boids at random
    /// positions within the current bounds.
    pub fn reseed(&mut self, count: usize) {
        self.flock.clear();
        for _ in 0..count {
            let x = self.rng.gen::<f32>() * self.bounds.width;
            let y = self.rng.gen::<f32>() * self.bounds.height;
            self.flock.add_boid(x, y, &mut self.rng);
        }
    }
}
