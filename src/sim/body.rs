//! Shared kinematics for everything that moves on the playfield
//!
//! The playfield is a torus: leaving one edge by more than your own radius
//! re-enters from the opposite edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Common capability of ship, bullets and asteroids
///
/// Collision detection only ever sees entities through this trait.
pub trait Body {
    fn position(&self) -> Vec2;
    fn bounding_radius(&self) -> f32;
    /// Advance one timestep (seconds)
    fn update(&mut self, dt: f32, field: &Playfield);
}

/// Rectangular playfield, origin bottom-left, y up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Uniformly random point inside the playfield
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }

    /// Wrap a position whose body has the given radius
    pub fn wrap(&self, mut pos: Vec2, radius: f32) -> Vec2 {
        pos.x = wrap_axis(pos.x, radius, self.width);
        pos.y = wrap_axis(pos.y, radius, self.height);
        pos
    }
}

#[inline]
fn wrap_axis(v: f32, radius: f32, extent: f32) -> f32 {
    if v < -radius {
        extent + radius
    } else if v > extent + radius {
        -radius
    } else {
        v
    }
}

/// Integrate position and wrap in one step
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, radius: f32, dt: f32, field: &Playfield) -> Vec2 {
    field.wrap(pos + vel * dt, radius)
}
