//! Character-grid renderer for terminals and logs

use glam::Vec2;
use std::f32::consts::{FRAC_PI_4, PI};

use super::shapes::{asteroid_outline, explosion_rings, ship_outline, thrust_flame};
use super::{AsteroidView, BulletView, Hud, SceneRenderer, ShipView};
use crate::sim::{AsteroidTier, Playfield};

/// Draws the scene into a `cols` x `rows` grid of characters
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    field: Playfield,
    grid: Vec<Vec<char>>,
    status: String,
    /// Collision circles requested by the last HUD
    show_bounding: bool,
}

impl AsciiRenderer {
    /// Grid of at least one cell each way
    pub fn new(cols: usize, rows: usize, field: Playfield) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            field,
            grid: vec![vec![' '; cols]; rows],
            status: String::new(),
            show_bounding: false,
        }
    }

    /// Status line followed by the grid, top row first
    pub fn frame(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * (self.rows + 1));
        out.push_str(&self.status);
        out.push('\n');
        for row in &self.grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    /// Character at a grid cell (row 0 is the top)
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Grid cell for a world position (y up, so row 0 is the top edge)
    pub fn to_cell(&self, pos: Vec2) -> Option<(usize, usize)> {
        let fx = pos.x / self.field.width;
        let fy = pos.y / self.field.height;
        if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
            return None;
        }
        let col = ((fx * self.cols as f32) as usize).min(self.cols - 1);
        let from_bottom = ((fy * self.rows as f32) as usize).min(self.rows - 1);
        Some((col, self.rows - 1 - from_bottom))
    }

    fn plot(&mut self, pos: Vec2, ch: char) {
        if let Some((col, row)) = self.to_cell(pos) {
            self.grid[row][col] = ch;
        }
    }

    fn plot_circle(&mut self, center: Vec2, radius: f32, ch: char) {
        for i in 0..16 {
            let a = i as f32 * PI / 8.0;
            self.plot(center + Vec2::new(a.cos(), a.sin()) * radius, ch);
        }
    }
}

/// Arrow glyph closest to a facing angle
fn heading_glyph(angle: f32) -> char {
    let a = angle.rem_euclid(2.0 * PI);
    match ((a + FRAC_PI_4) / (PI / 2.0)) as u32 % 4 {
        0 => '>',
        1 => '^',
        2 => '<',
        _ => 'v',
    }
}

impl SceneRenderer for AsciiRenderer {
    fn begin_frame(&mut self, hud: &Hud) {
        for row in &mut self.grid {
            row.fill(' ');
        }
        self.show_bounding = hud.show_bounding;
        let banner = if hud.game_over {
            "  GAME OVER - press R to restart"
        } else if hud.ready {
            "  press START"
        } else {
            ""
        };
        let best = hud.top_score.map(|s| format!("  HI {s}")).unwrap_or_default();
        self.status = format!(
            "SCORE {}  LIVES {}  LEVEL {}{}{}",
            hud.score, hud.lives, hud.level, best, banner
        );
    }

    fn draw_ship(&mut self, ship: &ShipView) {
        if let Some(progress) = ship.explode_progress {
            let [outer, ..] = explosion_rings(ship.radius, progress);
            self.plot_circle(ship.pos, outer, '*');
            self.plot(ship.pos, '#');
            return;
        }
        if self.show_bounding {
            self.plot_circle(ship.pos, ship.radius, ':');
        }
        if ship.visible {
            let [_, left, right] = ship_outline(ship);
            self.plot(left, ',');
            self.plot(right, ',');
            if ship.thrusting {
                let [tip, ..] = thrust_flame(ship);
                self.plot(tip, '~');
            }
            self.plot(ship.pos, heading_glyph(ship.angle));
        }
    }

    fn draw_bullet(&mut self, bullet: &BulletView) {
        self.plot(bullet.pos, '.');
    }

    fn draw_asteroid(&mut self, asteroid: &AsteroidView<'_>) {
        let ch = match asteroid.tier {
            AsteroidTier::Large => '@',
            AsteroidTier::Medium => 'O',
            AsteroidTier::Small => 'o',
        };
        for point in asteroid_outline(asteroid) {
            self.plot(point, '+');
        }
        if self.show_bounding {
            self.plot_circle(asteroid.pos, asteroid.radius, ':');
        }
        self.plot(asteroid.pos, ch);
    }
}
