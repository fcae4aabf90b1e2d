use glam::Vec2;
use rand::Rng;

use crate::boid::{Boid, SteeringWeights};
use crate::error::SimResult;
use crate::math_helpers::random_unit_vec;
use crate::options::{Bounds, SimOptions};

/// Fixed rule weights every tick advances with.
const FLOCK_WEIGHTS: SteeringWeights = SteeringWeights {
    alignment: 0.30,
    cohesion: 0.95,
    separation: 1.00,
};

/// The fixed-size collection of boids plus the shared world bounds.
pub struct Flock {
    bounds: Bounds,
    boids: Vec<Boid>,
}

impl Flock {
    /// Populates a flock of `options.init_boids` boids at uniformly random
    /// positions inside the window bounds, each with a random unit heading
    /// and sequential ids from 0.
    pub fn new(options: &SimOptions) -> SimResult<Self> {
        let bounds = options.bounds();
        let boids = populate(&bounds, options)?;

        Ok(Flock { bounds, boids })
    }

    /// Advances the whole flock by one tick towards/away from `target`.
    ///
    /// Every boid is stepped against the same pre-tick snapshot and the
    /// results are committed in place, so the new states are computed
    /// "simultaneously" and the iteration order cannot leak into the
    /// outcome.
    pub fn update(&mut self, target: Vec2) {
        let snapshot = self.boids.clone();

        for boid in self.boids.iter_mut() {
            *boid = boid.step(&self.bounds, &snapshot, target, &FLOCK_WEIGHTS);
        }
    }

    /// Turns target seeking on or off for every boid.
    pub fn set_seek_target(&mut self, enabled: bool) {
        for boid in self.boids.iter_mut() {
            boid.set_seek_target(enabled);
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

fn populate(bounds: &Bounds, options: &SimOptions) -> SimResult<Vec<Boid>> {
    let mut rng = rand::thread_rng();

    (0..options.init_boids)
        .map(|id| {
            let position = Vec2::new(
                rng.gen_range(bounds.x_min..=bounds.x_max),
                rng.gen_range(bounds.y_min..=bounds.y_max),
            );
            let heading = random_unit_vec(&mut rng);

            Boid::new(id, position, heading, options.boid)
        })
        .collect()
}
