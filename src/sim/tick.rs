//! Simulation tick
//!
//! One call advances the world by `dt` seconds:
//! input → ship → bullets → asteroids → collisions → lives/level bookkeeping.

use super::body::Body;
use super::collision::first_collision;
use super::ship::ShipTransition;
use super::state::{GameEvent, GamePhase, GameState};

/// Discrete input events from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    RotateLeft,
    RotateRight,
    RotateStop,
    ThrustStart,
    ThrustStop,
    FireRequested,
    HyperspaceRequested,
    StartGame,
    RestartAfterGameOver,
}

/// Input for a single tick: held controls plus buffered one-shot actions
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// -1 clockwise, 0 none, 1 counter-clockwise
    pub rotation: f32,
    pub thrusting: bool,
    /// Fire once (one-shot)
    pub fire: bool,
    /// Jump to a random spot (one-shot)
    pub hyperspace: bool,
}

impl TickInput {
    /// Fold a control event into the buffered input.
    /// Session events (start/restart) are not controls and are ignored here.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::RotateLeft => self.rotation = 1.0,
            InputEvent::RotateRight => self.rotation = -1.0,
            InputEvent::RotateStop => self.rotation = 0.0,
            InputEvent::ThrustStart => self.thrusting = true,
            InputEvent::ThrustStop => self.thrusting = false,
            InputEvent::FireRequested => self.fire = true,
            InputEvent::HyperspaceRequested => self.hyperspace = true,
            InputEvent::StartGame | InputEvent::RestartAfterGameOver => {}
        }
    }

    /// Forget one-shot actions once a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.fire = false;
        self.hyperspace = false;
    }
}

/// Advance the game state by one timestep (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Ready and GameOver only render
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    apply_input(state, input);

    // --- Ship ---
    if let Some(transition) = state.ship.advance_timers(dt) {
        handle_ship_transition(state, transition);
        if state.phase == GamePhase::GameOver {
            return;
        }
    }
    state.ship.update(dt, &state.playfield);

    // --- Bullets ---
    for bullet in &mut state.bullets {
        bullet.update(dt, &state.playfield);
    }
    state.bullets.retain(|b| !b.expired());

    // --- Asteroids ---
    for asteroid in &mut state.asteroids {
        asteroid.update(dt, &state.playfield);
    }

    // --- Collisions ---
    ship_asteroid_collisions(state);
    bullet_asteroid_collisions(state);

    // --- Level clear ---
    if state.asteroids.is_empty() && state.ship.is_controllable() {
        state.start_next_level();
    }
}

/// Held controls and buffered one-shots. Silently ignored when the ship can't act.
fn apply_input(state: &mut GameState, input: &TickInput) {
    state.ship.set_controls(input.rotation, input.thrusting);

    if input.hyperspace && state.ship.hyperspace(&mut state.rng, &state.playfield) {
        state.events.push(GameEvent::Hyperspace { pos: state.ship.pos });
    }

    if input.fire {
        if let Some(bullet) = state.ship.try_shoot(state.bullets.len()) {
            state.bullets.push(bullet);
            state.events.push(GameEvent::BulletFired);
        }
    }
}

fn handle_ship_transition(state: &mut GameState, transition: ShipTransition) {
    match transition {
        ShipTransition::ExplosionFinished => {
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::LifeLost { remaining: state.lives });

            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver { score: state.score });
                log::info!("Game over - score {} at level {}", state.score, state.level);
            } else {
                state.ship.respawn(state.playfield.center());
                state.events.push(GameEvent::ShipRespawned);
                log::debug!("Ship respawned, {} lives left", state.lives);
            }
        }
        ShipTransition::InvincibilityEnded => {
            state.events.push(GameEvent::InvincibilityEnded);
        }
    }
}

/// At most one ship hit per tick; skipped unless the ship is plain Alive
fn ship_asteroid_collisions(state: &mut GameState) {
    if !state.ship.is_vulnerable() {
        return;
    }

    if let Some(index) = first_collision(&state.ship, &state.asteroids) {
        state.ship.explode();
        state.events.push(GameEvent::ShipDestroyed { pos: state.ship.pos });
        state.destroy_asteroid(index);
    }
}

/// Each bullet destroys at most one asteroid and is consumed by it
fn bullet_asteroid_collisions(state: &mut GameState) {
    let mut i = 0;
    while i < state.bullets.len() {
        match first_collision(&state.bullets[i], &state.asteroids) {
            Some(index) => {
                state.bullets.remove(i);
                state.destroy_asteroid(index);
            }
            None => i += 1,
        }
    }
}
