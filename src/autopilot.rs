//! Idle-mode pilot
//!
//! Turns toward the nearest asteroid and fires when roughly lined up. Used by
//! the demo binary; produces the same input events a player would.

use crate::sim::{GameState, InputEvent};
use crate::{distance, normalize_angle};

/// Heading error (radians) below which the pilot stops turning
const AIM_DEADZONE: f32 = 0.05;
/// Heading error below which the pilot opens fire
const FIRE_CONE: f32 = 0.2;
/// Jump away when a rock gets this close (in ship radii past contact)
const PANIC_MARGIN: f32 = 1.5;

/// Input events for this frame
pub fn autopilot(state: &GameState) -> Vec<InputEvent> {
    let ship = &state.ship;
    if !ship.is_controllable() {
        return vec![InputEvent::RotateStop, InputEvent::ThrustStop];
    }

    let Some(target) = state
        .asteroids
        .iter()
        .min_by(|a, b| distance(ship.pos, a.pos).total_cmp(&distance(ship.pos, b.pos)))
    else {
        return vec![InputEvent::RotateStop];
    };

    let mut events = Vec::with_capacity(3);
    let to_target = target.pos - ship.pos;
    let error = normalize_angle(to_target.y.atan2(to_target.x) - ship.angle);

    events.push(if error > AIM_DEADZONE {
        InputEvent::RotateLeft
    } else if error < -AIM_DEADZONE {
        InputEvent::RotateRight
    } else {
        InputEvent::RotateStop
    });

    if error.abs() < FIRE_CONE {
        events.push(InputEvent::FireRequested);
    }

    let gap = to_target.length() - target.radius - ship.radius;
    if ship.is_vulnerable() && gap < ship.radius * PANIC_MARGIN {
        events.push(InputEvent::HyperspaceRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, AsteroidTier, ShipState};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn lone_target(offset: Vec2) -> GameState {
        let mut state = GameState::new(3, Tuning::default());
        state.asteroids.clear();
        let id = state.next_entity_id();
        let pos = state.ship.pos + offset;
        let rock = Asteroid::random(id, pos, AsteroidTier::Large, &state.tuning, &mut state.rng);
        state.asteroids.push(rock);
        state
    }

    #[test]
    fn test_fires_when_lined_up() {
        // Ship spawns facing up
        let events = autopilot(&lone_target(Vec2::new(0.0, 200.0)));
        assert!(events.contains(&InputEvent::RotateStop));
        assert!(events.contains(&InputEvent::FireRequested));
    }

    #[test]
    fn test_turns_toward_target() {
        let events = autopilot(&lone_target(Vec2::new(-200.0, 0.0)));
        assert_eq!(events, vec![InputEvent::RotateLeft]);

        let events = autopilot(&lone_target(Vec2::new(200.0, 0.0)));
        assert_eq!(events, vec![InputEvent::RotateRight]);
    }

    #[test]
    fn test_jumps_when_crowded() {
        let mut state = lone_target(Vec2::new(0.0, 70.0));
        state.ship.state = ShipState::Alive;
        let events = autopilot(&state);
        assert!(events.contains(&InputEvent::HyperspaceRequested));
    }

    #[test]
    fn test_hands_off_while_exploding() {
        let mut state = lone_target(Vec2::new(0.0, 200.0));
        state.ship.state = ShipState::Alive;
        state.ship.explode();
        let events = autopilot(&state);
        assert!(!events.contains(&InputEvent::FireRequested));
    }
}
