use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-boid kinematic parameters, fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoidParams {
    pub max_speed: f32,
    pub fov_radius: f32,
    pub body_radius: f32,
}

impl Default for BoidParams {
    fn default() -> Self {
        BoidParams {
            max_speed: 2.0,
            fov_radius: 85.0,
            body_radius: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimOptions {
    /// number of boids the flock is populated with
    pub init_boids: usize,
    /// window width in pixels
    pub init_width: u32,
    /// window height in pixels
    pub init_height: u32,
    pub boid: BoidParams,
}

impl Default for SimOptions {
    fn default() -> Self {
        SimOptions {
            init_boids: 175,
            init_width: 1500,
            init_height: 900,
            boid: Default::default(),
        }
    }
}

impl SimOptions {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_window(self.init_width, self.init_height)
    }
}

/// Axis-aligned world bounds, `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds of a window anchored at the origin.
    pub fn from_window(width: u32, height: u32) -> Self {
        Bounds::new(0., width as f32, 0., height as f32)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}
