//! Rock Field - an Asteroids-style arcade game core
//!
//! Core modules:
//! - `sim`: Simulation (kinematics, collisions, ship life-cycle, progression)
//! - `autopilot`: Idle-mode pilot that plays from the same input events
//! - `game`: Session driver (fixed timestep, input buffering, high-score entry)
//! - `render`: Read-only render hook and outline geometry
//! - `highscores`: Top-3 leaderboard
//! - `persistence`: Storage backends for the leaderboard
//! - `tuning`: Data-driven game balance

pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// All rates are per second; the simulation runs on elapsed seconds.
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ship triangle height; collision radius is half of this
    pub const SHIP_SIZE: f32 = 30.0;
    /// Thrust acceleration (pixels/s²)
    pub const SHIP_THRUST: f32 = 300.0;
    /// Velocity decay rate (fraction lost per second)
    pub const FRICTION: f32 = 0.7;
    /// Turn rate (radians/s) - one full turn per second
    pub const TURN_SPEED: f32 = std::f32::consts::TAU;
    /// Facing angle on spawn (pointing up)
    pub const SHIP_START_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
    pub const SHIP_EXPLODE_DUR: f32 = 0.3;
    pub const SHIP_INV_DUR: f32 = 3.0;
    /// Visibility flips once per blink duration while invincible
    pub const SHIP_BLINK_DUR: f32 = 0.1;
    pub const SHIP_SHOOT_COOLDOWN: f32 = 0.1;
    pub const STARTING_LIVES: u8 = 3;

    pub const BULLET_SPEED: f32 = 500.0;
    pub const BULLET_MAX: usize = 10;
    pub const BULLET_LIFETIME: f32 = 1.0;
    pub const BULLET_RADIUS: f32 = 2.0;

    /// Asteroids at level 1; one more per level after that
    pub const ASTEROID_NUM: u32 = 3;
    /// Diameter of a large asteroid
    pub const ASTEROID_SIZE: f32 = 100.0;
    /// Max speed of a large-size unit (scaled up for smaller tiers)
    pub const ASTEROID_SPEED: f32 = 50.0;
    /// Average vertex count of the jagged outline
    pub const ASTEROID_VERT: u32 = 10;
    /// Jaggedness (0 = round, 1 = spiky)
    pub const ASTEROID_JAG: f32 = 0.4;
    /// Max spin (radians/s)
    pub const ASTEROID_SPIN: f32 = 1.0;
    /// Reject-and-resample budget for safe spawn positions
    pub const SPAWN_ATTEMPTS: u32 = 64;

    pub const ASTEROID_PTS_LGE: u64 = 20;
    pub const ASTEROID_PTS_MED: u64 = 50;
    pub const ASTEROID_PTS_SML: u64 = 100;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a facing angle (0 = right, π/2 = up)
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
