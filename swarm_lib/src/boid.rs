use glam::Vec2;
use rand::Rng;

use crate::{
    options::{Bounds, SteeringWeights},
    vec2::Vec2Ext,
};

/// Boids further apart than this do not repel each other.
pub const DESIRED_SEPARATION: f32 = 30.0;
/// Alignment and cohesion consider boids up to this far away.
pub const NEIGHBOUR_RADIUS: f32 = 40.0;

/// One flocking agent: kinematic state plus its own steering limits.
///
/// Boids hold no references to each other; neighbour relationships are
/// recomputed every tick from the shared neighbour view.
#[derive(Debug, Clone, Copy)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    acceleration: Vec2,
    /// steering force limit
    pub max_force: f32,
    /// speed limit
    pub max_speed: f32,
    /// length of the rendered heading line
    pub size: f32,
}

impl Boid {
    /// Creates a new [`Boid`] at the given position with a random initial
    /// velocity, each component drawn uniformly from [-1, 1].
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let velocity = Vec2::new(rng.gen::<f32>() * 2. - 1., rng.gen::<f32>() * 2. - 1.);

        Boid {
            position: Vec2::new(x, y),
            velocity,
            acceleration: Vec2::ZERO,
            max_force: 0.03,
            max_speed: 2.0,
            size: 6.0,
        }
    }

    /// Accumulates into the acceleration without resetting it, so several
    /// steering contributions can be summed before integrating.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Kinematic update for one tick. Accumulated forces act exactly once
    /// and the acceleration is cleared for the next tick.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    /// Wrap-around borders: an out-of-range coordinate snaps straight to
    /// the opposite edge. This is a one-step snap, not a modulo wrap; a
    /// boid overshooting the arena reappears at the boundary itself.
    pub fn wrap_bounds(&mut self, bounds: Bounds) {
        if self.position.x < 0. {
            self.position.x = bounds.width;
        }
        if self.position.y < 0. {
            self.position.y = bounds.height;
        }
        if self.position.x > bounds.width {
            self.position.x = 0.;
        }
        if self.position.y > bounds.height {
            self.position.y = 0.;
        }
    }

    /// Weighted sum of the three steering behaviours, all computed
    /// against the same pre-tick neighbour view.
    pub fn steering(&self, neighbours: &[Boid], weights: &SteeringWeights) -> Vec2 {
        self.separate(neighbours) * weights.separation
            + self.align(neighbours) * weights.alignment
            + self.cohesion(neighbours) * weights.cohesion
    }

    /// Steer away from boids closer than [`DESIRED_SEPARATION`], each
    /// contribution weighted by inverse distance.
    pub fn separate(&self, neighbours: &[Boid]) -> Vec2 {
        let mut steer = Vec2::ZERO;
        let mut count = 0;

        for other in neighbours {
            let distance = self.position.distance(other.position);
            // d == 0 is the boid itself in the shared neighbour view
            if distance > 0. && distance < DESIRED_SEPARATION {
                let away = (self.position - other.position).normalize_safe() / distance;
                steer += away;
                count += 1;
            }
        }

        if count > 0 {
            steer /= count as f32;
        }

        if steer.length_squared() > 0. {
            steer = steer.normalize_safe() * self.max_speed - self.velocity;
            steer = steer.limit(self.max_force);
        }

        steer
    }

    /// Match the average heading of boids within [`NEIGHBOUR_RADIUS`].
    pub fn align(&self, neighbours: &[Boid]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in neighbours {
            let distance = self.position.distance(other.position);
            if distance > 0. && distance < NEIGHBOUR_RADIUS {
                sum += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            let desired = (sum / count as f32).normalize_safe() * self.max_speed;
            (desired - self.velocity).limit(self.max_force)
        } else {
            Vec2::ZERO
        }
    }

    /// Steer towards the centroid of boids within [`NEIGHBOUR_RADIUS`].
    pub fn cohesion(&self, neighbours: &[Boid]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in neighbours {
            let distance = self.position.distance(other.position);
            if distance > 0. && distance < NEIGHBOUR_RADIUS {
                sum += other.position;
                count += 1;
            }
        }

        if count > 0 {
            self.seek(sum / count as f32)
        } else {
            Vec2::ZERO
        }
    }

    /// "Move towards a point" primitive, shared with cohesion: desired
    /// velocity towards the target at full speed, steering clamped to
    /// `max_force`.
    pub fn seek(&self, target: Vec2) -> Vec2 {
        let desired = (target - self.position).normalize_safe() * self.max_speed;
        (desired - self.velocity).limit(self.max_force)
    }
}
