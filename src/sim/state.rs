//! Game state and progression bookkeeping
//!
//! `GameState` owns every entity and counter. Nothing else holds a mutable
//! reference across ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::{Asteroid, AsteroidTier, asteroid_count_for_level, safe_spawn_point};
use super::body::Playfield;
use super::bullet::Bullet;
use super::ship::Ship;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Level 1 laid out, waiting for StartGame
    Ready,
    /// Active gameplay
    Playing,
    /// Out of lives; only a restart leaves this phase
    GameOver,
}

/// Outcomes emitted during a tick for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BulletFired,
    Hyperspace { pos: Vec2 },
    AsteroidDestroyed {
        tier: AsteroidTier,
        points: u64,
        pos: Vec2,
    },
    ShipDestroyed { pos: Vec2 },
    LifeLost { remaining: u8 },
    ShipRespawned,
    InvincibilityEnded,
    LevelStarted { level: u32 },
    GameOver { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub playfield: Playfield,
    pub phase: GamePhase,
    /// Current level (1-based once a game is laid out)
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    /// Live bullets, oldest first
    pub bullets: Vec<Bullet>,
    /// Live asteroids in spawn order (collision scans use this order)
    pub asteroids: Vec<Asteroid>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Lay out level 1 and wait for StartGame
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let playfield = Playfield::new(tuning.playfield_width, tuning.playfield_height);
        let ship = Ship::new(&tuning, playfield.center());
        let lives = tuning.starting_lives;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            playfield,
            phase: GamePhase::Ready,
            level: 0,
            score: 0,
            lives,
            time_ticks: 0,
            ship,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        state.start_next_level();
        state
    }

    /// Full restart: new ship, empty field, counters reset, level 1, playing.
    /// The RNG stream carries on so consecutive games differ.
    pub fn reset(&mut self) {
        self.ship = Ship::new(&self.tuning, self.playfield.center());
        self.bullets.clear();
        self.asteroids.clear();
        self.events.clear();
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.level = 0;
        self.time_ticks = 0;
        self.start_next_level();
        self.phase = GamePhase::Playing;
        log::info!("Game restarted (seed {})", self.seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance the level counter, respawn the ship at the center and spawn the wave
    pub fn start_next_level(&mut self) {
        self.level += 1;
        self.ship.respawn(self.playfield.center());
        self.spawn_wave();
        log::info!(
            "Level {} started with {} asteroids",
            self.level,
            self.asteroids.len()
        );
        self.events.push(GameEvent::LevelStarted { level: self.level });
    }

    /// Spawn the level's large asteroids clear of the ship
    pub fn spawn_wave(&mut self) {
        let count = asteroid_count_for_level(&self.tuning, self.level);
        let clearance = self.tuning.asteroid_size * 2.0 + self.ship.radius;

        for _ in 0..count {
            let pos = safe_spawn_point(
                &mut self.rng,
                &self.playfield,
                self.ship.pos,
                clearance,
                self.tuning.spawn_attempts,
            );
            let id = self.next_entity_id();
            let asteroid =
                Asteroid::random(id, pos, AsteroidTier::Large, &self.tuning, &mut self.rng);
            self.asteroids.push(asteroid);
        }
    }

    /// Remove the asteroid at `index`, award its points and spawn fragments.
    /// Returns the points awarded.
    pub fn destroy_asteroid(&mut self, index: usize) -> u64 {
        let asteroid = self.asteroids.remove(index);
        let points = asteroid.tier.points();
        self.score += points;

        if asteroid.splits(self.tuning.asteroid_size) {
            if let Some(child_tier) = asteroid.tier.split() {
                for _ in 0..2 {
                    let id = self.next_entity_id();
                    let child = Asteroid::random(
                        id,
                        asteroid.pos,
                        child_tier,
                        &self.tuning,
                        &mut self.rng,
                    );
                    self.asteroids.push(child);
                }
            }
        }

        self.events.push(GameEvent::AsteroidDestroyed {
            tier: asteroid.tier,
            points,
            pos: asteroid.pos,
        });
        points
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;
    use crate::sim::asteroid::split_floor;

    fn state() -> GameState {
        GameState::new(12345, Tuning::default())
    }

    #[test]
    fn test_new_game_layout() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.asteroids.len(), 3);
        assert!(state.bullets.is_empty());
        assert!(state.asteroids.iter().all(|a| a.tier == AsteroidTier::Large));
        assert_eq!(state.ship.pos, state.playfield.center());
        assert_eq!(state.events, vec![GameEvent::LevelStarted { level: 1 }]);
    }

    #[test]
    fn test_wave_spawns_clear_of_ship() {
        let mut state = state();
        for _ in 0..20 {
            state.asteroids.clear();
            state.spawn_wave();
            for a in &state.asteroids {
                assert!(distance(a.pos, state.ship.pos) >= 215.0);
            }
        }
    }

    #[test]
    fn test_level_count_grows() {
        let mut state = state();
        state.asteroids.clear();
        state.start_next_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.asteroids.len(), 4);
        state.asteroids.clear();
        state.start_next_level();
        assert_eq!(state.asteroids.len(), 5);
    }

    #[test]
    fn test_destroy_large_spawns_two_medium_at_same_spot() {
        let mut state = state();
        let parent_pos = state.asteroids[0].pos;
        let before = state.asteroids.len();

        let points = state.destroy_asteroid(0);

        assert_eq!(points, 20);
        assert_eq!(state.score, 20);
        assert_eq!(state.asteroids.len(), before + 1);
        let children: Vec<_> = state
            .asteroids
            .iter()
            .filter(|a| a.tier == AsteroidTier::Medium)
            .collect();
        assert_eq!(children.len(), 2);
        for child in children {
            assert_eq!(child.pos, parent_pos);
            assert_eq!(child.radius, 25.0);
        }
    }

    #[test]
    fn test_destroy_small_leaves_nothing() {
        let mut state = state();
        state.asteroids.clear();
        let id = state.next_entity_id();
        let small = Asteroid::random(
            id,
            Vec2::new(10.0, 10.0),
            AsteroidTier::Small,
            &state.tuning,
            &mut state.rng,
        );
        assert!(small.radius <= split_floor(state.tuning.asteroid_size));
        state.asteroids.push(small);

        assert_eq!(state.destroy_asteroid(0), 100);
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_reset_restores_counters() {
        let mut state = state();
        state.score = 990;
        state.lives = 1;
        state.level = 6;
        state.phase = GamePhase::GameOver;

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 3);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = state();
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events.is_empty());
    }
}
