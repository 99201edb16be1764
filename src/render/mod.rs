//! Render hook
//!
//! The simulation hands renderers read-only views once per frame. Nothing a
//! renderer receives can reach back into [`GameState`].

pub mod ascii;
pub mod shapes;

pub use ascii::AsciiRenderer;

use glam::Vec2;

use crate::sim::{AsteroidTier, GamePhase, GameState, ShipState};

/// HUD text values
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub ready: bool,
    pub game_over: bool,
    pub top_score: Option<u64>,
    /// Draw collision circles (debug)
    pub show_bounding: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipView {
    pub pos: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Hull should be drawn this frame (false while blinking off or exploding)
    pub visible: bool,
    pub thrusting: bool,
    pub invincible: bool,
    /// Explosion progress in [0, 1] while exploding
    pub explode_progress: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidView<'a> {
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub tier: AsteroidTier,
    pub offsets: &'a [f32],
}

/// Implemented by whatever paints the scene
pub trait SceneRenderer {
    fn begin_frame(&mut self, hud: &Hud);
    fn draw_ship(&mut self, ship: &ShipView);
    fn draw_bullet(&mut self, bullet: &BulletView);
    fn draw_asteroid(&mut self, asteroid: &AsteroidView<'_>);
    fn end_frame(&mut self) {}
}

/// Build the HUD values for a state
pub fn hud(state: &GameState, top_score: Option<u64>) -> Hud {
    Hud {
        score: state.score,
        lives: state.lives,
        level: state.level,
        ready: state.phase == GamePhase::Ready,
        game_over: state.phase == GamePhase::GameOver,
        top_score,
        show_bounding: state.tuning.show_bounding,
    }
}

/// Feed one frame of the scene to a renderer
pub fn render_scene<R: SceneRenderer + ?Sized>(
    state: &GameState,
    top_score: Option<u64>,
    renderer: &mut R,
) {
    renderer.begin_frame(&hud(state, top_score));

    for asteroid in &state.asteroids {
        renderer.draw_asteroid(&AsteroidView {
            pos: asteroid.pos,
            radius: asteroid.radius,
            angle: asteroid.angle,
            tier: asteroid.tier,
            offsets: &asteroid.offsets,
        });
    }

    for bullet in &state.bullets {
        renderer.draw_bullet(&BulletView {
            pos: bullet.pos,
            radius: bullet.radius,
        });
    }

    let ship = &state.ship;
    if ship.state != ShipState::Destroyed {
        renderer.draw_ship(&ShipView {
            pos: ship.pos,
            angle: ship.angle,
            radius: ship.radius,
            visible: ship.is_visible(),
            thrusting: ship.thrusting && ship.is_controllable(),
            invincible: ship.is_invincible(),
            explode_progress: ship.is_exploding().then(|| ship.explode_progress()),
        });
    }

    renderer.end_frame();
}
