//! Full game through the public API: shoot, split, lose every life, record the score.

use glam::Vec2;
use rock_field::consts::SIM_DT;
use rock_field::persistence::{MemoryStore, ScoreStore};
use rock_field::render::AsciiRenderer;
use rock_field::sim::{
    Asteroid, AsteroidTier, GameEvent, GamePhase, GameState, ShipState, TickInput, tick,
};
use rock_field::{Game, HighScores, Tuning};

fn idle() -> TickInput {
    TickInput::default()
}

fn place(state: &mut GameState, pos: Vec2, tier: AsteroidTier) {
    let id = state.next_entity_id();
    let mut asteroid = Asteroid::random(id, pos, tier, &state.tuning, &mut state.rng);
    asteroid.vel = Vec2::ZERO;
    state.asteroids.push(asteroid);
}

#[test]
fn test_shoot_split_then_game_over() {
    let mut state = GameState::new(42, Tuning::default());
    assert_eq!(state.phase, GamePhase::Ready);
    state.phase = GamePhase::Playing;
    state.drain_events();

    // One large rock straight above the ship
    state.asteroids.clear();
    let target = state.ship.pos + Vec2::new(0.0, 150.0);
    place(&mut state, target, AsteroidTier::Large);

    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    tick(&mut state, &fire, SIM_DT);
    assert_eq!(state.bullets.len(), 1);

    for _ in 0..60 {
        tick(&mut state, &idle(), SIM_DT);
        if state.score > 0 {
            break;
        }
    }
    assert_eq!(state.score, 20);
    assert!(state.bullets.is_empty());
    assert_eq!(state.asteroids.len(), 2);
    assert!(state.asteroids.iter().all(|a| a.tier == AsteroidTier::Medium && a.pos == target));
    for a in &mut state.asteroids {
        a.vel = Vec2::ZERO;
    }

    // Park a small rock on the ship once per life
    let mut events = state.drain_events();
    let mut last_score = state.score;
    while state.phase == GamePhase::Playing {
        let lives = state.lives;
        state.ship.state = ShipState::Alive;
        let ship_pos = state.ship.pos;
        place(&mut state, ship_pos, AsteroidTier::Small);

        for _ in 0..100 {
            tick(&mut state, &idle(), SIM_DT);
            events.extend(state.drain_events());
            assert!(state.score >= last_score);
            last_score = state.score;
            if state.lives < lives {
                break;
            }
        }
        assert_eq!(state.lives, lives - 1);
    }

    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.lives, 0);
    assert_eq!(state.ship.state, ShipState::Destroyed);
    let game_overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(game_overs, vec![&GameEvent::GameOver { score: state.score }]);

    // Frozen from here on
    let score = state.score;
    let ticks = state.time_ticks;
    let positions: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();
    for _ in 0..120 {
        tick(&mut state, &fire, SIM_DT);
    }
    assert_eq!(state.score, score);
    assert_eq!(state.time_ticks, ticks);
    assert!(state.bullets.is_empty());
    assert_eq!(state.asteroids.iter().map(|a| a.pos).collect::<Vec<_>>(), positions);
    assert!(state.drain_events().is_empty());

    let mut table = HighScores::new();
    assert_eq!(table.add_score("zed", score), Some(1));
    assert_eq!(table.entries[0].initials, "ZED");
}

#[test]
fn test_session_renders_and_keeps_scores() {
    let mut store = MemoryStore::new();
    let mut seeded = HighScores::new();
    seeded.add_score("OLD", 5000);
    store.save(&seeded).expect("save");

    let mut game = Game::new(11, Tuning::default(), store);
    assert_eq!(game.high_scores().top_score(), Some(5000));

    let mut screen = AsciiRenderer::new(40, 15, game.state().playfield);
    game.render(&mut screen);
    assert!(screen.frame().starts_with("SCORE 0  LIVES 3  LEVEL 1  HI 5000"));

    game.handle(rock_field::sim::InputEvent::StartGame);
    let events = game.update(0.1);
    assert!(game.state().time_ticks > 0);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
}
