//! Per-frame simulation step
//!
//! Mode transitions first, then (only while playing) one fully resolved
//! frame: intro freeze, wave clear, controls, motion, collisions, cleanup,
//! game-over check.

use super::collision::{CollisionReport, resolve_collisions};
use super::motion::integrate_all;
use super::spawner;
use super::state::{GameEvent, GameMode, GameState};
use crate::audio::AudioSink;

/// Input commands for a single frame. `fire`, `pause` and `start` are
/// edge-triggered (true only on the frame of the press); the rest are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub fire: bool,
    pub pause: bool,
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub start: bool,
}

/// What the playing branch did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not playing; nothing simulated
    Frozen,
    /// Wave-intro countdown consumed the frame
    Intro,
    /// Field was empty; next level generated
    LevelAdvanced,
    /// Normal gameplay frame, with what the collision pass resolved
    Simulated(CollisionReport),
}

/// Advance the game by one frame. `dt` must already be clamped to the
/// frame ceiling by the caller.
///
/// `state.events` holds only this frame's events once `tick` returns;
/// anything the caller did not drain from the previous frame is dropped.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    audio: &mut dyn AudioSink,
) -> FrameOutcome {
    state.events.clear();

    apply_mode_input(state, input);

    let outcome = if state.mode == GameMode::Playing {
        play_frame(state, input, dt)
    } else {
        FrameOutcome::Frozen
    };

    for event in &state.events {
        if let Some(cue) = event.sound_cue() {
            audio.play(cue);
        }
    }

    outcome
}

/// Start and pause handling. Start only works from the menu or after game
/// over; pause only toggles between playing and paused.
fn apply_mode_input(state: &mut GameState, input: &TickInput) {
    match state.mode {
        GameMode::MainMenu | GameMode::GameOver if input.start => {
            state.reset_run();
            state.set_mode(GameMode::Playing);
        }
        GameMode::Playing if input.pause => state.set_mode(GameMode::Paused),
        GameMode::Paused if input.pause => state.set_mode(GameMode::Playing),
        _ => {}
    }
}

fn play_frame(state: &mut GameState, input: &TickInput, dt: f32) -> FrameOutcome {
    // Wave intro: everything holds still
    if state.level_intro_remaining > 0.0 {
        state.level_intro_remaining = (state.level_intro_remaining - dt).max(0.0);
        return FrameOutcome::Intro;
    }

    if state.live_obstacle_count() == 0 {
        state.level += 1;
        state.start_level();
        return FrameOutcome::LevelAdvanced;
    }

    state.frame_count += 1;

    apply_controls(state, input, dt);
    let tuning = state.tuning.clone();
    integrate_all(state.entities_mut(), dt, &tuning);
    let report = resolve_collisions(state);
    state.remove_dead();

    if state.player.lives == 0 {
        log::info!(
            "Game over at level {} with score {} after {} frames",
            state.level,
            state.score,
            state.frame_count
        );
        state.set_mode(GameMode::GameOver);
    }

    FrameOutcome::Simulated(report)
}

/// Rotation, thrust and firing, applied before motion
fn apply_controls(state: &mut GameState, input: &TickInput, dt: f32) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    let mut turn = 0.0;
    if input.rotate_left {
        turn -= 1.0;
    }
    if input.rotate_right {
        turn += 1.0;
    }
    if turn != 0.0 {
        player.body.rotate(turn * tuning.player_rotation_speed * dt);
    }

    player.thrusting = input.thrust;
    if input.thrust {
        player.body.vel += player.facing() * tuning.player_acceleration * dt;
    }

    if input.fire && player.can_fire() {
        let shot = spawner::spawn_projectile(player, tuning);
        player.fire_cooldown = tuning.fire_cooldown;
        state.projectiles.push(shot);
        state.events.push(GameEvent::ProjectileFired);
    }
}
