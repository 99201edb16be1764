//! Player bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Playfield, integrate};
use crate::direction;

/// A bullet in flight. Speed is fixed and independent of the ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Seconds until the bullet fizzles out
    pub lifetime: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32, speed: f32, radius: f32, lifetime: f32) -> Self {
        Self {
            pos,
            vel: direction(angle) * speed,
            radius,
            lifetime,
        }
    }

    pub fn expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

impl Body for Bullet {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn bounding_radius(&self) -> f32 {
        self.radius
    }

    fn update(&mut self, dt: f32, field: &Playfield) {
        self.pos = integrate(self.pos, self.vel, self.radius, dt, field);
        self.lifetime -= dt;
    }
}
