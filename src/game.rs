//! Game session
//!
//! Owns the simulation plus everything around it that isn't gameplay:
//! fixed-timestep accumulation, input buffering between ticks, and high-score
//! entry after a game over.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::HighScores;
use crate::persistence::ScoreStore;
use crate::render::{SceneRenderer, render_scene};
use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, TickInput, tick};
use crate::tuning::Tuning;

/// Longest frame we'll simulate; anything longer is treated as a stall
const MAX_FRAME_DT: f32 = 0.1;

/// Game instance holding all state
pub struct Game<S: ScoreStore> {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    high_scores: HighScores,
    store: S,
    /// Score waiting for initials after a qualifying game over
    pending_score: Option<u64>,
}

impl<S: ScoreStore> Game<S> {
    /// New session at the Ready screen. Unreadable scores start an empty table.
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let high_scores = match store.load() {
            Ok(scores) => scores,
            Err(e) => {
                log::warn!("Could not load high scores, starting fresh: {e}");
                HighScores::new()
            }
        };
        let state = GameState::new(seed, tuning);
        log::info!("Game initialized with seed: {}", state.seed);

        Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
            high_scores,
            store,
            pending_score: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// True after a game over whose score made the table, until initials arrive
    pub fn awaiting_initials(&self) -> bool {
        self.pending_score.is_some()
    }

    /// Buffer an input event. Controls only count while playing.
    pub fn handle(&mut self, event: InputEvent) {
        match (event, self.state.phase) {
            (InputEvent::StartGame, GamePhase::Ready) => {
                self.state.phase = GamePhase::Playing;
                self.state.drain_events();
                log::info!("Game started");
            }
            (InputEvent::RestartAfterGameOver, GamePhase::GameOver) => {
                if self.pending_score.take().is_some() {
                    log::info!("Restarted without entering initials");
                }
                self.state.reset();
                self.input = TickInput::default();
                self.accumulator = 0.0;
            }
            (InputEvent::StartGame | InputEvent::RestartAfterGameOver, _) => {}
            (_, GamePhase::Playing) => self.input.apply(event),
            _ => {}
        }
    }

    /// Run as many fixed ticks as `dt` seconds of wall time cover.
    /// Returns the events they produced, oldest first.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        if self.state.phase != GamePhase::Playing {
            self.accumulator = 0.0;
            return Vec::new();
        }
        // NaN would poison the accumulator for good
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();
            events.extend(self.state.drain_events());
        }

        for event in &events {
            log::debug!("{:?}", event);
            if let GameEvent::GameOver { score } = event {
                self.on_game_over(*score);
            }
        }
        events
    }

    fn on_game_over(&mut self, score: u64) {
        if let Some(rank) = self.high_scores.potential_rank(score) {
            log::info!("Score {} qualifies for rank {}", score, rank);
            self.pending_score = Some(score);
        }
    }

    /// Enter initials for the pending score. Returns the rank achieved.
    /// Storage failures are logged; the in-memory table is still updated.
    pub fn submit_initials(&mut self, initials: &str) -> Option<usize> {
        let score = self.pending_score.take()?;
        let rank = self.high_scores.add_score(initials, score)?;
        if let Err(e) = self.store.save(&self.high_scores) {
            log::warn!("Failed to save high scores: {e}");
        }
        Some(rank)
    }

    /// Render-only; works in every phase
    pub fn render<R: SceneRenderer + ?Sized>(&self, renderer: &mut R) {
        render_scene(&self.state, self.high_scores.top_score(), renderer);
    }
}
