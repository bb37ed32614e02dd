//! Rock Blaster - A wrap-around arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, spawning, collisions, game modes)
//! - `render`: Render collaborator boundary (draw lists, outline vertices)
//! - `audio`: Audio collaborator boundary (fire-and-forget sound cues)
//! - `platform`: Input edge detection and frame-delta clamping
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 768.0;

    /// Largest frame delta the simulation is ever handed
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Reference frame rate the per-frame damping factor is expressed at
    pub const REFERENCE_FPS: f32 = 60.0;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_ROTATION_SPEED: f32 = 270.0; // degrees/s
    pub const PLAYER_ACCELERATION: f32 = 600.0; // pixels/s²
    pub const PLAYER_DAMPING: f32 = 0.98; // per reference frame
    pub const PLAYER_MAX_SPEED: f32 = 500.0;
    pub const PLAYER_INVULNERABILITY_TIME: f32 = 3.0;
    pub const PLAYER_START_LIVES: u32 = 3;
    /// Facing straight up (screen y grows downward)
    pub const PLAYER_SPAWN_ROTATION: f32 = 270.0;
    pub const PLAYER_BLINK_PERIOD: f32 = 0.1;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 600.0;
    pub const PROJECTILE_LIFETIME: f32 = 3.0;
    pub const PROJECTILE_RADIUS: f32 = 2.0;
    pub const MUZZLE_OFFSET: f32 = 20.0;
    pub const FIRE_COOLDOWN: f32 = 0.25;

    /// Obstacles
    pub const OBSTACLE_SPEED_MIN: f32 = 50.0;
    pub const OBSTACLE_SPEED_MAX: f32 = 150.0;
    pub const OBSTACLE_SPIN_MIN: f32 = 20.0;
    pub const OBSTACLE_SPIN_MAX: f32 = 70.0;
    pub const OBSTACLE_LARGE_RADIUS: f32 = 40.0;
    pub const OBSTACLE_MEDIUM_RADIUS: f32 = 20.0;
    pub const OBSTACLE_SMALL_RADIUS: f32 = 10.0;
    pub const OBSTACLE_POINTS_LARGE: u32 = 20;
    pub const OBSTACLE_POINTS_MEDIUM: u32 = 50;
    pub const OBSTACLE_POINTS_SMALL: u32 = 100;
    pub const OBSTACLE_VERTICES_MIN: u32 = 8;
    pub const OBSTACLE_VERTICES_MAX: u32 = 12;
    pub const OBSTACLE_JITTER_MIN: f32 = 0.5;
    pub const OBSTACLE_JITTER_MAX: f32 = 1.5;
    pub const FRAGMENT_OFFSET: f32 = 10.0;

    /// Waves
    pub const WAVE_BASE_COUNT: u32 = 4;
    pub const WAVE_COUNT_PER_LEVEL: u32 = 2;
    pub const WAVE_MAX_COUNT: u32 = 12;
    pub const SPAWN_CLEARANCE: f32 = 150.0;
    pub const LEVEL_INTRO_DURATION: f32 = 2.0;

    /// Debris
    pub const DEBRIS_COUNT: u32 = 15;
    pub const DEBRIS_SPEED_MIN: f32 = 50.0;
    pub const DEBRIS_SPEED_MAX: f32 = 150.0;
    pub const DEBRIS_LIFETIME_MIN: f32 = 0.5;
    pub const DEBRIS_LIFETIME_MAX: f32 = 1.0;
    pub const DEBRIS_RADIUS: f32 = 1.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector pointing along a heading given in degrees
#[inline]
pub fn heading_to_vec(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Convert polar (length, radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
