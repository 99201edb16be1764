//! Asteroids: size tiers, motion, and the spawn/split policy
//!
//! A destroyed asteroid above the split floor breaks into two children of half
//! its radius (rounded up) at the same spot. Small ones just vanish.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Playfield, integrate};
use crate::consts::{ASTEROID_PTS_LGE, ASTEROID_PTS_MED, ASTEROID_PTS_SML};
use crate::tuning::Tuning;
use crate::{direction, distance, normalize_angle};

/// Size class. Each tier is half the radius of the one above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// Collision radius for a given base size (diameter of a large asteroid)
    pub fn radius(self, size: f32) -> f32 {
        match self {
            AsteroidTier::Large => (size / 2.0).ceil(),
            AsteroidTier::Medium => (AsteroidTier::Large.radius(size) / 2.0).ceil(),
            AsteroidTier::Small => (AsteroidTier::Medium.radius(size) / 2.0).ceil(),
        }
    }

    /// Score for destroying an asteroid of this tier
    pub fn points(self) -> u64 {
        match self {
            AsteroidTier::Large => ASTEROID_PTS_LGE,
            AsteroidTier::Medium => ASTEROID_PTS_MED,
            AsteroidTier::Small => ASTEROID_PTS_SML,
        }
    }

    /// Tier of the two fragments, if this tier splits at all
    pub fn split(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }
}

/// Radius at or below which asteroids don't split
pub fn split_floor(size: f32) -> f32 {
    (size / 8.0).ceil()
}

/// Number of large asteroids a level starts with (levels are 1-based)
pub fn asteroid_count_for_level(tuning: &Tuning, level: u32) -> u32 {
    tuning.asteroid_num + level.saturating_sub(1)
}

/// An asteroid entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: AsteroidTier,
    pub radius: f32,
    /// Outline orientation (radians)
    pub angle: f32,
    /// Spin (radians/s)
    pub rotation_speed: f32,
    /// Per-vertex radius multipliers for the jagged outline
    pub offsets: Vec<f32>,
}

impl Asteroid {
    /// Create an asteroid with random heading, speed, spin and shape
    pub fn random(
        id: u32,
        pos: Vec2,
        tier: AsteroidTier,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Self {
        let radius = tier.radius(tuning.asteroid_size);

        // Smaller asteroids move faster
        let heading = rng.random::<f32>() * TAU;
        let speed = rng.random::<f32>() * tuning.asteroid_speed * (tuning.asteroid_size / radius);

        let vert_min = (tuning.asteroid_vert / 2).max(3);
        let vert_count = rng.random_range(vert_min..=vert_min + tuning.asteroid_vert);
        let jag = tuning.asteroid_jag;
        let offsets = (0..vert_count)
            .map(|_| rng.random::<f32>() * jag * 2.0 + 1.0 - jag)
            .collect();

        let spin = tuning.asteroid_spin;
        let rotation_speed = if spin > 0.0 {
            rng.random_range(-spin..=spin)
        } else {
            0.0
        };

        Self {
            id,
            pos,
            vel: direction(heading) * speed,
            tier,
            radius,
            angle: rng.random::<f32>() * TAU,
            rotation_speed,
            offsets,
        }
    }

    /// Whether this asteroid breaks into fragments when destroyed
    pub fn splits(&self, size: f32) -> bool {
        self.tier.split().is_some() && self.radius > split_floor(size)
    }
}

impl Body for Asteroid {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn bounding_radius(&self) -> f32 {
        self.radius
    }

    fn update(&mut self, dt: f32, field: &Playfield) {
        self.pos = integrate(self.pos, self.vel, self.radius, dt, field);
        self.angle = normalize_angle(self.angle + self.rotation_speed * dt);
    }
}

/// Random point at least `clearance` away from `avoid`.
///
/// Gives up after `attempts` rejections and returns an unconstrained point so
/// a crowded playfield can't stall level start.
pub fn safe_spawn_point(
    rng: &mut impl Rng,
    field: &Playfield,
    avoid: Vec2,
    clearance: f32,
    attempts: u32,
) -> Vec2 {
    for _ in 0..attempts {
        let candidate = field.random_point(rng);
        if distance(candidate, avoid) >= clearance {
            return candidate;
        }
    }
    log::warn!(
        "No spawn point {:.0}px clear of ({:.0}, {:.0}) after {} attempts, placing anywhere",
        clearance,
        avoid.x,
        avoid.y,
        attempts
    );
    field.random_point(rng)
}
