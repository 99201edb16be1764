//! Outline geometry for 2D primitives
//!
//! Pure functions from entity views to world-space points. Renderers decide
//! how to stroke or fill them.

use glam::Vec2;
use std::f32::consts::TAU;

use super::{AsteroidView, ShipView};
use crate::direction;

/// Hull triangle: nose, rear left, rear right
pub fn ship_outline(ship: &ShipView) -> [Vec2; 3] {
    let (s, c) = ship.angle.sin_cos();
    let r = ship.radius;
    [
        ship.pos + direction(ship.angle) * r,
        ship.pos - Vec2::new(c + s, s - c) * r,
        ship.pos - Vec2::new(c - s, s + c) * r,
    ]
}

/// Thrust flame behind the hull: tip, base left, base right
pub fn thrust_flame(ship: &ShipView) -> [Vec2; 3] {
    let (s, c) = ship.angle.sin_cos();
    let r = ship.radius;
    [
        ship.pos - Vec2::new(c + 0.5 * s, s - 0.5 * c) * r,
        ship.pos - Vec2::new(c + s, s - c) * r * 0.7,
        ship.pos - Vec2::new(c - s, s + c) * r * 0.7,
    ]
}

/// Jagged polygon for an asteroid, one point per offset
pub fn asteroid_outline(asteroid: &AsteroidView) -> Vec<Vec2> {
    let count = asteroid.offsets.len();
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f32;

    asteroid
        .offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            asteroid.pos + direction(asteroid.angle + i as f32 * step) * asteroid.radius * offset
        })
        .collect()
}

/// Radii of the three expanding explosion rings (outer to inner)
pub fn explosion_rings(radius: f32, progress: f32) -> [f32; 3] {
    let p = progress.clamp(0.0, 1.0);
    [
        radius * (1.0 + p * 2.0),
        radius * (1.0 + p),
        radius * (1.0 + p * 0.5),
    ]
}
