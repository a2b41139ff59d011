use glam::Vec2;
use rand::Rng;

use crate::{
    boid::Boid,
    options::{Bounds, SteeringWeights},
};

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// every boid advanced by one step
    Stepped,
    /// nothing to simulate, the caller may render a placeholder instead
    Empty,
}

/// Owns the boids and the behaviour weights and drives one synchronous
/// simulation step at a time.
///
/// Insertion order is stable, which keeps runs with a fixed seed
/// reproducible; the all-pairs interaction itself does not depend on it.
#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    pub weights: SteeringWeights,
}

impl Flock {
    pub fn new(weights: SteeringWeights) -> Self {
        Flock {
            boids: Vec::with_capacity(128),
            weights,
        }
    }

    /// Advances the whole flock by one tick, O(n²) over the boids.
    ///
    /// Every boid's steering is computed against the same pre-tick state
    /// before any boid moves, so the result is independent of iteration
    /// order. The neighbour view deliberately contains the boid itself;
    /// the behaviours skip it through their zero-distance check.
    pub fn tick(&mut self, bounds: Bounds) -> TickOutcome {
        if self.boids.is_empty() {
            return TickOutcome::Empty;
        }

        // calculation pass over the immutable snapshot
        let steering: Vec<Vec2> = self
            .boids
            .iter()
            .map(|boid| boid.steering(&self.boids, &self.weights))
            .collect();

        // update pass, each boid only writes its own state
        for (boid, force) in self.boids.iter_mut().zip(steering) {
            boid.apply_force(force);
            boid.integrate();
            boid.wrap_bounds(bounds);
        }

        TickOutcome::Stepped
    }

    /// Appends a new boid with a random initial velocity. No upper bound
    /// on the count is enforced here.
    pub fn add_boid(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.boids.push(Boid::new(x, y, rng));
    }

    pub fn clear(&mut self) {
        self.boids.clear();
    }

    /// Read-only view of the current boid state, e.g. for the render
    /// pass or the watcher.
    pub fn view(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::{Flock, TickOutcome};
    use crate::{
        boid::Boid,
        options::{Bounds, SteeringWeights},
    };

    const BOUNDS: Bounds = Bounds {
        width: 480.,
        height: 480.,
    };

    fn flock_of(positions: &[(f32, f32)]) -> Flock {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut flock = Flock::new(SteeringWeights::default());
        for (x, y) in positions {
            flock.add_boid(*x, *y, &mut rng);
        }
        flock
    }

    #[test]
    fn empty_flock_tick_is_a_noop() {
        let mut flock = Flock::new(SteeringWeights::default());

        assert_eq!(flock.tick(BOUNDS), TickOutcome::Empty);
        assert!(flock.is_empty());
    }

    #[test]
    fn tick_reports_stepped_for_populated_flock() {
        let mut flock = flock_of(&[(100., 100.), (120., 110.)]);

        assert_eq!(flock.tick(BOUNDS), TickOutcome::Stepped);
        assert_eq!(flock.len(), 2);
    }

    #[test]
    fn add_and_clear_round_trip() {
        let mut flock = flock_of(&[(10., 10.), (20., 20.), (30., 30.)]);
        assert_eq!(flock.len(), 3);

        flock.clear();
        assert!(flock.is_empty());
        assert_eq!(flock.tick(BOUNDS), TickOutcome::Empty);
    }

    // All boids must see the same pre-tick snapshot: a sequential
    // implementation that moves boids while iterating would feed later
    // boids the already-updated state and diverge from this reference.
    #[test]
    fn tick_uses_the_pre_tick_snapshot_for_every_boid() {
        let mut flock = flock_of(&[(100., 100.), (110., 104.), (120., 96.)]);

        let snapshot = flock.view().to_vec();
        let expected: Vec<Boid> = snapshot
            .iter()
            .map(|b| {
                let mut b = *b;
                let force = b.steering(&snapshot, &flock.weights);
                b.apply_force(force);
                b.integrate();
                b.wrap_bounds(BOUNDS);
                b
            })
            .collect();

        flock.tick(BOUNDS);

        for (actual, expected) in flock.view().iter().zip(&expected) {
            assert_relative_eq!(actual.position.x, expected.position.x);
            assert_relative_eq!(actual.position.y, expected.position.y);
            assert_relative_eq!(actual.velocity.x, expected.velocity.x);
            assert_relative_eq!(actual.velocity.y, expected.velocity.y);
        }
    }

    #[test]
    fn speed_stays_clamped_after_many_ticks() {
        let mut flock = flock_of(&[(100., 100.), (105., 100.), (100., 105.), (103., 103.)]);

        for _ in 0..50 {
            flock.tick(BOUNDS);
        }

        for boid in flock.view() {
            assert!(boid.velocity.length() <= boid.max_speed + 1e-4);
            assert!(!boid.position.x.is_nan() && !boid.position.y.is_nan());
        }
    }

    #[test]
    fn weights_can_change_between_ticks() {
        let mut flock = flock_of(&[(100., 100.), (110., 100.)]);

        flock.tick(BOUNDS);

        // zeroing all weights leaves only the current velocity in play
        flock.weights = SteeringWeights {
            separation: 0.,
            alignment: 0.,
            cohesion: 0.,
        };
        let before: Vec<Vec2> = flock.view().iter().map(|b| b.velocity).collect();
        flock.tick(BOUNDS);

        for (boid, velocity) in flock.view().iter().zip(before) {
            assert_relative_eq!(boid.velocity.x, velocity.x);
            assert_relative_eq!(boid.velocity.y, velocity.y);
        }
    }
}
