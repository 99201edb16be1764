//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]. A JSON file may override any subset
//! of fields; missing fields keep their default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(&'static str),
}

/// Runtime balance values (all rates per second)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Ship ===
    pub ship_size: f32,
    pub ship_thrust: f32,
    pub friction: f32,
    pub turn_speed: f32,
    pub explode_duration: f32,
    pub invincible_duration: f32,
    pub blink_duration: f32,
    pub shoot_cooldown: f32,
    pub starting_lives: u8,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_max: usize,
    pub bullet_lifetime: f32,
    pub bullet_radius: f32,

    // === Asteroids ===
    pub asteroid_num: u32,
    pub asteroid_size: f32,
    pub asteroid_speed: f32,
    pub asteroid_vert: u32,
    pub asteroid_jag: f32,
    pub asteroid_spin: f32,
    pub spawn_attempts: u32,

    // === Debug ===
    /// Renderers draw collision circles when set
    pub show_bounding: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            ship_size: SHIP_SIZE,
            ship_thrust: SHIP_THRUST,
            friction: FRICTION,
            turn_speed: TURN_SPEED,
            explode_duration: SHIP_EXPLODE_DUR,
            invincible_duration: SHIP_INV_DUR,
            blink_duration: SHIP_BLINK_DUR,
            shoot_cooldown: SHIP_SHOOT_COOLDOWN,
            starting_lives: STARTING_LIVES,

            bullet_speed: BULLET_SPEED,
            bullet_max: BULLET_MAX,
            bullet_lifetime: BULLET_LIFETIME,
            bullet_radius: BULLET_RADIUS,

            asteroid_num: ASTEROID_NUM,
            asteroid_size: ASTEROID_SIZE,
            asteroid_speed: ASTEROID_SPEED,
            asteroid_vert: ASTEROID_VERT,
            asteroid_jag: ASTEROID_JAG,
            asteroid_spin: ASTEROID_SPIN,
            spawn_attempts: SPAWN_ATTEMPTS,

            show_bounding: false,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string and validate it
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(TuningError::Invalid("playfield must have positive size"));
        }
        if self.ship_size <= 0.0 || self.asteroid_size <= 0.0 || self.bullet_radius <= 0.0 {
            return Err(TuningError::Invalid("entity sizes must be positive"));
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid("starting_lives must be at least 1"));
        }
        if self.explode_duration <= 0.0 || self.invincible_duration <= 0.0 {
            return Err(TuningError::Invalid("ship timers must be positive"));
        }
        if self.blink_duration <= 0.0 {
            return Err(TuningError::Invalid("blink_duration must be positive"));
        }
        if !(0.0..1.0).contains(&self.asteroid_jag) {
            return Err(TuningError::Invalid("asteroid_jag must be in [0, 1)"));
        }
        Ok(())
    }

    /// Collision radius of the ship
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }
}
