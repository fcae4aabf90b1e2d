use std::f32::consts::PI;

use glam::Vec2;

use crate::{
    error::{SimError, SimResult},
    math_helpers::velocity_angle,
    options::{BoidParams, Bounds},
};

/// Mixing weights for the three flocking rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringWeights {
    pub alignment: f32,
    pub cohesion: f32,
    pub separation: f32,
}

impl SteeringWeights {
    pub const ZERO: SteeringWeights = SteeringWeights {
        alignment: 0.,
        cohesion: 0.,
        separation: 0.,
    };
}

/// Steering forces are capped at this fraction of the boid's max speed.
const MAX_FORCE_SPEED_PERCENT: f32 = 0.20;

const EPSILON: f32 = 1e-11;

#[derive(Debug, Clone, Copy)]
pub struct Boid {
    /// sequential id starting from 0
    pub id: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    max_speed: f32,
    max_force: f32,
    fov_radius: f32,
    body_radius: f32,
    seek_target: bool,
}

/// Snapshot self-exclusion compares kinematic state, not parameters: a
/// snapshot entry is "this boid" only when id, position and velocity all
/// match, so a peer duplicating our position at distance zero still counts
/// as a neighbour.
impl PartialEq for Boid {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.position == other.position && self.velocity == other.velocity
    }
}

impl Boid {
    /// Creates a new [`Boid`] heading in the direction of `heading` at full
    /// speed. Fails fast on any negative parameter.
    pub fn new(id: usize, position: Vec2, heading: Vec2, params: BoidParams) -> SimResult<Boid> {
        validate_params(&params)?;

        Ok(Boid {
            id,
            position,
            velocity: heading.normalize() * params.max_speed,
            max_speed: params.max_speed,
            max_force: MAX_FORCE_SPEED_PERCENT * params.max_speed,
            fov_radius: params.fov_radius,
            body_radius: params.body_radius,
            seek_target: false,
        })
    }

    /// Computes this boid's post-tick state against a pre-tick snapshot of
    /// the whole flock.
    ///
    /// Reads only `self` and `snapshot`, never a peer's in-progress state,
    /// so all boids of a tick may be stepped in any order (or in parallel)
    /// and committed afterwards.
    pub fn step(
        &self,
        bounds: &Bounds,
        snapshot: &[Boid],
        target: Vec2,
        weights: &SteeringWeights,
    ) -> Boid {
        let mut next = *self;

        // the flocking rules read the velocity before the epsilon fix below
        let mut acceleration = next.flock_force(snapshot, weights);

        next.fix_zero_velocity_components();
        acceleration += next.containment(bounds);

        if next.seek_target {
            acceleration += next.seek(target);
        }

        // renormalized to exactly max_speed, not just clamped: steering only
        // ever drifts the direction while cruising speed stays constant
        next.velocity = (next.velocity + acceleration).normalize_or_zero() * next.max_speed;
        next.position += next.velocity;

        next
    }

    /// Weighted sum of alignment, cohesion and separation over the boids in
    /// sight, capped at `max_force`.
    fn flock_force(&self, snapshot: &[Boid], weights: &SteeringWeights) -> Vec2 {
        let neighbours = self.neighbours(snapshot);

        let force = self.alignment(&neighbours) * weights.alignment
            + self.cohesion(&neighbours) * weights.cohesion
            + self.separation(&neighbours) * weights.separation;

        force.clamp_length_max(self.max_force)
    }

    fn neighbours<'a>(&self, snapshot: &'a [Boid]) -> Vec<&'a Boid> {
        snapshot
            .iter()
            .filter(|other| {
                self.position.distance(other.position) < self.fov_radius && **other != *self
            })
            .collect()
    }

    /// Steer towards the mean heading of the neighbours.
    fn alignment(&self, neighbours: &[&Boid]) -> Vec2 {
        if neighbours.is_empty() {
            return Vec2::ZERO;
        }

        let mut desired = Vec2::ZERO;

        for other in neighbours {
            desired += other.velocity;
        }

        self.steer_toward(desired / neighbours.len() as f32)
    }

    /// Steer towards the neighbours' centre of mass.
    fn cohesion(&self, neighbours: &[&Boid]) -> Vec2 {
        if neighbours.is_empty() {
            return Vec2::ZERO;
        }

        let mut center = Vec2::ZERO;

        for other in neighbours {
            center += other.position;
        }

        center /= neighbours.len() as f32;

        // a centre of mass sitting exactly on top of us has no direction to it
        if center == self.position {
            return Vec2::ZERO;
        }

        self.steer_toward(center - self.position)
    }

    /// Steer away from the neighbours, closer ones pushing harder (scaled
    /// linearly by the fov radius). Peers at exactly zero distance
    /// contribute nothing.
    fn separation(&self, neighbours: &[&Boid]) -> Vec2 {
        let mut desired = Vec2::ZERO;
        let mut count = 0;

        for other in neighbours {
            let distance = self.position.distance(other.position);

            if distance > 0. {
                let away = (self.position - other.position).normalize();
                desired += away / (distance / self.fov_radius);
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }

        self.steer_toward(desired / count as f32)
    }

    /// Reynolds steering: the force that turns the current velocity into
    /// max-speed travel along `desired`. A zero desired direction yields a
    /// zero force.
    fn steer_toward(&self, desired: Vec2) -> Vec2 {
        if desired.length() > 0. {
            desired.normalize() * self.max_speed - self.velocity
        } else {
            Vec2::ZERO
        }
    }

    /// Axis-independent boundary repulsion keeping the boid inside `bounds`.
    fn containment(&self, bounds: &Bounds) -> Vec2 {
        Vec2::new(
            self.bound_force(self.position.x, bounds.x_min, bounds.x_max),
            self.bound_force(self.position.y, bounds.y_min, bounds.y_max),
        )
    }

    /// Single-axis component of the containment force. At or past a bound
    /// the push back inward is effectively infinite (`1/EPSILON`) and
    /// dominates every other force; a bound merely within sight pushes
    /// with a force growing as the boid nears it.
    fn bound_force(&self, p: f32, min: f32, max: f32) -> f32 {
        let dist_min = (p - min).abs();
        let dist_max = (p - max).abs();

        if p <= min {
            1. / EPSILON
        } else if dist_min < self.fov_radius {
            self.max_force / (dist_min / self.fov_radius)
        } else if p >= max {
            -1. / EPSILON
        } else if dist_max < self.fov_radius {
            -self.max_force / (dist_max / self.fov_radius)
        } else {
            0.
        }
    }

    /// An exactly-zero velocity component would skip its axis' velocity
    /// angle computation; it is nudged to epsilon ahead of the containment
    /// pass. The containment branches themselves fire on position only and
    /// are untouched by this nudge.
    fn fix_zero_velocity_components(&mut self) {
        if self.velocity.x == 0. {
            self.velocity.x = EPSILON;
        }

        if self.velocity.y == 0. {
            self.velocity.y = EPSILON;
        }
    }

    /// Steering force towards `target`, active only while the target is
    /// within sight, capped at `max_force`.
    fn seek(&self, target: Vec2) -> Vec2 {
        if self.position.distance(target) >= self.fov_radius {
            return Vec2::ZERO;
        }

        self.steer_toward(target - self.position)
            .clamp_length_max(self.max_force)
    }

    /// Triangle-vertex draw descriptor: three points `body_radius` away
    /// from the centre, the first one being the nose marker pointing along
    /// the current velocity.
    pub fn vertices(&self) -> [Vec2; 3] {
        let start_angle = velocity_angle(self.velocity);
        let mut vertices = [Vec2::ZERO; 3];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            let angle = start_angle + 2. * PI * i as f32 / 3.;
            *vertex = self.position + self.body_radius * Vec2::new(angle.cos(), angle.sin());
        }

        vertices
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    pub fn fov_radius(&self) -> f32 {
        self.fov_radius
    }

    pub fn body_radius(&self) -> f32 {
        self.body_radius
    }

    pub fn is_seek_target(&self) -> bool {
        self.seek_target
    }

    pub fn set_seek_target(&mut self, enabled: bool) {
        self.seek_target = enabled;
    }
}

fn validate_params(params: &BoidParams) -> SimResult<()> {
    if params.max_speed < 0. {
        Err(SimError::InvalidParameter {
            name: "max_speed",
            value: params.max_speed,
        })
    } else if params.fov_radius < 0. {
        Err(SimError::InvalidParameter {
            name: "fov_radius",
            value: params.fov_radius,
        })
    } else if params.body_radius < 0. {
        Err(SimError::InvalidParameter {
            name: "body_radius",
            value: params.body_radius,
        })
    } else {
        Ok(())
    }
}
