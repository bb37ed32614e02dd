//! Rock Blaster headless entry point
//!
//! Runs the simulation without a window: a scripted pilot drives the input,
//! events are logged, and a JSON summary is printed at the end. Usage:
//!
//! ```text
//! RUST_LOG=info rock-blaster [settings.json]
//! ```

use serde::Serialize;

use rock_blaster::Settings;
use rock_blaster::audio::AudioManager;
use rock_blaster::platform::{FrameClock, InputLatch, KeyState};
use rock_blaster::render;
use rock_blaster::sim::{GameEvent, GameMode, GameState, tick};

/// Fixed wall-clock step for the headless run
const HEADLESS_DT: f64 = 1.0 / 60.0;

/// End-of-run report
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u32,
    simulated_frames: u64,
    mode: GameMode,
    score: u64,
    level: u32,
    lives: u32,
    obstacles_destroyed: u32,
    cues_played: u64,
    entities_on_screen: usize,
}

/// Scripted pilot: presses start, spins slowly, taps fire and thrusts in
/// short bursts
fn pilot(frame: u32) -> KeyState {
    KeyState {
        action: frame % 12 < 6,
        pause: false,
        thrust: frame % 180 < 20,
        left: (frame / 240) % 2 == 0,
        right: (frame / 240) % 2 == 1,
    }
}

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("No settings file given, using defaults");
        return Settings::default();
    };
    match Settings::load_from_path(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring settings file {path}: {e}");
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Rock Blaster (headless) starting...");

    let settings = load_settings();
    let seed = settings.resolve_seed();
    let mut state = GameState::with_tuning(seed, settings.tuning.clone());
    let mut audio = AudioManager::new(settings.audio.clone());
    let mut clock = FrameClock::new(settings.max_frame_dt);
    let mut latch = InputLatch::new();
    let mut destroyed = 0u32;

    clock.advance(0.0);
    for frame in 0..settings.frames {
        let dt = clock.advance((frame + 1) as f64 * HEADLESS_DT);
        let input = latch.sample(pilot(frame));
        tick(&mut state, &input, dt, &mut audio);

        for event in state.drain_events() {
            match event {
                GameEvent::ObstacleDestroyed { .. } => destroyed += 1,
                GameEvent::ModeChanged { from, to } => {
                    log::info!("Frame {frame}: {from:?} -> {to:?}");
                }
                _ => {}
            }
        }
    }

    let summary = RunSummary {
        seed,
        frames: settings.frames,
        simulated_frames: state.frame_count,
        mode: state.mode,
        score: state.score,
        level: state.level,
        lives: state.player.lives,
        obstacles_destroyed: destroyed,
        cues_played: audio.played(),
        entities_on_screen: render::frame(&state).items.len(),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize run summary: {e}"),
    }
}
