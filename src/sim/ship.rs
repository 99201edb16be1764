//! Player ship: kinematics and life-cycle state machine
//!
//! ```text
//! Alive ─hit─▶ Exploding ─timer─▶ Destroyed ─respawn─▶ Invincible ─timer─▶ Alive
//!                                   │
//!                                   └─ no lives left: stays Destroyed (game over)
//! ```

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Playfield, integrate};
use super::bullet::Bullet;
use crate::consts::SHIP_START_ANGLE;
use crate::tuning::Tuning;
use crate::{direction, normalize_angle};

/// Life-cycle state of the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShipState {
    /// Normal control, vulnerable
    Alive,
    /// Blowing up; ignores input, doesn't move
    Exploding { timer: f32 },
    /// Controllable and collision-immune after a respawn.
    /// `visible` is a presentation signal only.
    Invincible {
        timer: f32,
        blink_timer: f32,
        visible: bool,
    },
    /// Explosion over. Awaiting respawn, or permanent once the last life is spent.
    Destroyed,
}

/// Timer-driven transitions the controller must react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipTransition {
    /// Explosion finished; a life should be deducted
    ExplosionFinished,
    /// Invincibility window closed; ship is vulnerable again
    InvincibilityEnded,
}

/// Ship constants pulled out of [`Tuning`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipParams {
    pub thrust: f32,
    pub friction: f32,
    pub turn_speed: f32,
    pub explode_duration: f32,
    pub invincible_duration: f32,
    pub blink_duration: f32,
    pub shoot_cooldown: f32,
    pub bullet_speed: f32,
    pub bullet_lifetime: f32,
    pub bullet_radius: f32,
    pub bullet_max: usize,
}

impl From<&Tuning> for ShipParams {
    fn from(t: &Tuning) -> Self {
        Self {
            thrust: t.ship_thrust,
            friction: t.friction,
            turn_speed: t.turn_speed,
            explode_duration: t.explode_duration,
            invincible_duration: t.invincible_duration,
            blink_duration: t.blink_duration,
            shoot_cooldown: t.shoot_cooldown,
            bullet_speed: t.bullet_speed,
            bullet_lifetime: t.bullet_lifetime,
            bullet_radius: t.bullet_radius,
            bullet_max: t.bullet_max,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing (radians, 0 = right, π/2 = up)
    pub angle: f32,
    /// -1 clockwise, 0 none, 1 counter-clockwise
    pub rotation: f32,
    pub thrusting: bool,
    pub radius: f32,
    pub state: ShipState,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
    pub params: ShipParams,
}

impl Ship {
    /// A fresh, vulnerable ship at `spawn`
    pub fn new(tuning: &Tuning, spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            angle: SHIP_START_ANGLE,
            rotation: 0.0,
            thrusting: false,
            radius: tuning.ship_radius(),
            state: ShipState::Alive,
            shoot_cooldown: 0.0,
            params: ShipParams::from(tuning),
        }
    }

    /// Alive or Invincible
    pub fn is_controllable(&self) -> bool {
        matches!(self.state, ShipState::Alive | ShipState::Invincible { .. })
    }

    /// Only a plain Alive ship can be hit
    pub fn is_vulnerable(&self) -> bool {
        matches!(self.state, ShipState::Alive)
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.state, ShipState::Exploding { .. })
    }

    pub fn is_invincible(&self) -> bool {
        matches!(self.state, ShipState::Invincible { .. })
    }

    /// Whether a renderer should draw the hull this frame
    pub fn is_visible(&self) -> bool {
        match self.state {
            ShipState::Alive => true,
            ShipState::Invincible { visible, .. } => visible,
            ShipState::Exploding { .. } | ShipState::Destroyed => false,
        }
    }

    pub fn explode_timer(&self) -> f32 {
        match self.state {
            ShipState::Exploding { timer } => timer,
            _ => 0.0,
        }
    }

    pub fn invincible_timer(&self) -> f32 {
        match self.state {
            ShipState::Invincible { timer, .. } => timer,
            _ => 0.0,
        }
    }

    pub fn blink_timer(&self) -> f32 {
        match self.state {
            ShipState::Invincible { blink_timer, .. } => blink_timer,
            _ => 0.0,
        }
    }

    /// Explosion progress in [0, 1] (0 when not exploding)
    pub fn explode_progress(&self) -> f32 {
        match self.state {
            ShipState::Exploding { timer } => {
                (1.0 - timer / self.params.explode_duration).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Point where bullets leave the hull
    pub fn nose(&self) -> Vec2 {
        self.pos + direction(self.angle) * self.radius
    }

    /// Apply held controls; ignored unless controllable
    pub fn set_controls(&mut self, rotation: f32, thrusting: bool) {
        if !self.is_controllable() {
            return;
        }
        self.rotation = rotation.clamp(-1.0, 1.0);
        self.thrusting = thrusting;
    }

    /// Start exploding. Returns false if the ship wasn't in a state that can be hit.
    pub fn explode(&mut self) -> bool {
        if !self.is_vulnerable() {
            return false;
        }
        self.state = ShipState::Exploding {
            timer: self.params.explode_duration,
        };
        self.rotation = 0.0;
        self.thrusting = false;
        log::debug!("Ship exploding at ({:.0}, {:.0})", self.pos.x, self.pos.y);
        true
    }

    /// Reset to the spawn point with a fresh invincibility window
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.angle = SHIP_START_ANGLE;
        self.rotation = 0.0;
        self.thrusting = false;
        self.shoot_cooldown = 0.0;
        self.state = ShipState::Invincible {
            timer: self.params.invincible_duration,
            blink_timer: self.params.blink_duration,
            visible: true,
        };
    }

    /// Instant teleport to a random point. No invincibility is granted.
    pub fn hyperspace(&mut self, rng: &mut impl Rng, field: &Playfield) -> bool {
        if !self.is_controllable() {
            return false;
        }
        self.pos = field.random_point(rng);
        true
    }

    /// Fire if controllable, off cooldown and under the bullet cap
    pub fn try_shoot(&mut self, live_bullets: usize) -> Option<Bullet> {
        if !self.is_controllable()
            || self.shoot_cooldown > 0.0
            || live_bullets >= self.params.bullet_max
        {
            return None;
        }
        self.shoot_cooldown = self.params.shoot_cooldown;
        Some(Bullet::new(
            self.nose(),
            self.angle,
            self.params.bullet_speed,
            self.params.bullet_radius,
            self.params.bullet_lifetime,
        ))
    }

    /// Count down cooldown and life-cycle timers
    pub fn advance_timers(&mut self, dt: f32) -> Option<ShipTransition> {
        self.shoot_cooldown = (self.shoot_cooldown - dt).max(0.0);
        let blink_duration = self.params.blink_duration;

        match &mut self.state {
            ShipState::Exploding { timer } => {
                *timer -= dt;
                if *timer <= 0.0 {
                    self.state = ShipState::Destroyed;
                    return Some(ShipTransition::ExplosionFinished);
                }
            }
            ShipState::Invincible {
                timer,
                blink_timer,
                visible,
            } => {
                *timer -= dt;
                *blink_timer -= dt;
                if blink_duration > 0.0 {
                    while *blink_timer <= 0.0 {
                        *visible = !*visible;
                        *blink_timer += blink_duration;
                    }
                } else {
                    // No blink period: stay visible
                    *visible = true;
                }
                if *timer <= 0.0 {
                    self.state = ShipState::Alive;
                    return Some(ShipTransition::InvincibilityEnded);
                }
            }
            ShipState::Alive | ShipState::Destroyed => {}
        }
        None
    }
}

impl Body for Ship {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn bounding_radius(&self) -> f32 {
        self.radius
    }

    /// Thrust, friction, rotation, motion. A ship that isn't controllable stays put.
    fn update(&mut self, dt: f32, field: &Playfield) {
        if !self.is_controllable() {
            return;
        }

        if self.thrusting {
            self.vel += direction(self.angle) * self.params.thrust * dt;
        }

        self.vel *= (1.0 - self.params.friction * dt).max(0.0);
        self.angle = normalize_angle(self.angle + self.rotation * self.params.turn_speed * dt);
        self.pos = integrate(self.pos, self.vel, self.radius, dt, field);
    }
}
