//! Rock Field - native demo
//!
//! Runs an autopilot session in the terminal and records the final score.
//! Usage: `rock-field [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use rock_field::{
    Game, Tuning,
    autopilot::autopilot,
    persistence::JsonFileStore,
    render::AsciiRenderer,
    sim::{GameEvent, InputEvent},
};

/// Frame length fed to the session (60 fps)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f32 = 1.0 / 60.0;
/// Two minutes of play at most
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u32 = 60 * 120;
/// Print the screen every two seconds
#[cfg(not(target_arch = "wasm32"))]
const PRINT_EVERY: u32 = 120;
#[cfg(not(target_arch = "wasm32"))]
const SCORES_PATH: &str = "rock-field-scores.json";

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rock Field (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Bad tuning file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed);

    let mut game = Game::new(seed, tuning, JsonFileStore::new(SCORES_PATH));
    let mut screen = AsciiRenderer::new(80, 30, game.state().playfield);
    game.handle(InputEvent::StartGame);

    for frame in 0..MAX_FRAMES {
        for event in autopilot(game.state()) {
            game.handle(event);
        }

        for event in game.update(FRAME_DT) {
            match event {
                GameEvent::LevelStarted { level } => println!("-- level {level} --"),
                GameEvent::LifeLost { remaining } => println!("-- ship lost, {remaining} left --"),
                _ => {}
            }
        }

        if frame % PRINT_EVERY == 0 {
            game.render(&mut screen);
            println!("{}", screen.frame());
        }

        if game.state().is_game_over() {
            break;
        }
    }

    game.render(&mut screen);
    println!("{}", screen.frame());
    println!(
        "Final score {} at level {}",
        game.state().score,
        game.state().level
    );

    if game.awaiting_initials() {
        if let Some(rank) = game.submit_initials("CPU") {
            println!("New high score, rank {rank}");
        }
    }

    println!("HIGH SCORES");
    for (i, entry) in game.high_scores().entries.iter().enumerate() {
        println!("{}. {} {:>7}", i + 1, entry.initials, entry.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No terminal on wasm; embed the library instead
}
