//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - Elapsed-seconds timing, all rates per second
//! - Seeded RNG only
//! - Collision scans in collection order

pub mod asteroid;
pub mod body;
pub mod bullet;
pub mod collision;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidTier, asteroid_count_for_level, split_floor};
pub use body::{Body, Playfield};
pub use bullet::Bullet;
pub use collision::{circles_overlap, collides, first_collision};
pub use ship::{Ship, ShipState, ShipTransition};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, TickInput, tick};
