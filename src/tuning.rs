//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here, so a settings
//! file can rebalance the game without touching code. Defaults come from
//! [`crate::consts`].

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Inclusive-exclusive float range used for randomized parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Range form for `Rng::random_range`
    pub fn range(&self) -> Range<f32> {
        self.min..self.max
    }

    /// A span can always be sampled when it is finite and non-empty
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Degrees per second while a rotate key is held
    pub player_rotation_speed: f32,
    /// Thrust acceleration (pixels/s²)
    pub player_acceleration: f32,
    /// Velocity multiplier applied per reference frame (1/60 s)
    pub player_damping: f32,
    pub player_max_speed: f32,
    pub invulnerability_time: f32,
    pub starting_lives: u32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    pub projectile_radius: f32,
    /// Distance from the ship centre to the muzzle
    pub muzzle_offset: f32,
    pub fire_cooldown: f32,

    // === Obstacles ===
    pub obstacle_speed: Span,
    /// Spin magnitude in degrees/s; the sign is rolled separately
    pub obstacle_spin: Span,
    pub large_radius: f32,
    pub medium_radius: f32,
    pub small_radius: f32,
    pub large_points: u32,
    pub medium_points: u32,
    pub small_points: u32,
    pub vertices_min: u32,
    pub vertices_max: u32,
    /// Per-vertex radius multiplier for the polygon outline
    pub vertex_jitter: Span,
    pub fragment_offset: f32,

    // === Waves ===
    pub wave_base_count: u32,
    pub wave_count_per_level: u32,
    pub wave_max_count: u32,
    pub spawn_clearance: f32,
    pub level_intro_duration: f32,

    // === Debris ===
    pub debris_count: u32,
    pub debris_speed: Span,
    pub debris_lifetime: Span,
    pub debris_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_rotation_speed: PLAYER_ROTATION_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_damping: PLAYER_DAMPING,
            player_max_speed: PLAYER_MAX_SPEED,
            invulnerability_time: PLAYER_INVULNERABILITY_TIME,
            starting_lives: PLAYER_START_LIVES,

            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
            projectile_radius: PROJECTILE_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            fire_cooldown: FIRE_COOLDOWN,

            obstacle_speed: Span::new(OBSTACLE_SPEED_MIN, OBSTACLE_SPEED_MAX),
            obstacle_spin: Span::new(OBSTACLE_SPIN_MIN, OBSTACLE_SPIN_MAX),
            large_radius: OBSTACLE_LARGE_RADIUS,
            medium_radius: OBSTACLE_MEDIUM_RADIUS,
            small_radius: OBSTACLE_SMALL_RADIUS,
            large_points: OBSTACLE_POINTS_LARGE,
            medium_points: OBSTACLE_POINTS_MEDIUM,
            small_points: OBSTACLE_POINTS_SMALL,
            vertices_min: OBSTACLE_VERTICES_MIN,
            vertices_max: OBSTACLE_VERTICES_MAX,
            vertex_jitter: Span::new(OBSTACLE_JITTER_MIN, OBSTACLE_JITTER_MAX),
            fragment_offset: FRAGMENT_OFFSET,

            wave_base_count: WAVE_BASE_COUNT,
            wave_count_per_level: WAVE_COUNT_PER_LEVEL,
            wave_max_count: WAVE_MAX_COUNT,
            spawn_clearance: SPAWN_CLEARANCE,
            level_intro_duration: LEVEL_INTRO_DURATION,

            debris_count: DEBRIS_COUNT,
            debris_speed: Span::new(DEBRIS_SPEED_MIN, DEBRIS_SPEED_MAX),
            debris_lifetime: Span::new(DEBRIS_LIFETIME_MIN, DEBRIS_LIFETIME_MAX),
            debris_radius: DEBRIS_RADIUS,
        }
    }
}

impl Tuning {
    /// Check that every randomized range can be sampled and every size is
    /// positive. Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_radius", self.player_radius),
            ("player_max_speed", self.player_max_speed),
            ("projectile_radius", self.projectile_radius),
            ("projectile_lifetime", self.projectile_lifetime),
            ("large_radius", self.large_radius),
            ("medium_radius", self.medium_radius),
            ("small_radius", self.small_radius),
            ("debris_radius", self.debris_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }

        if !(self.player_damping > 0.0 && self.player_damping <= 1.0) {
            return Err(format!(
                "player_damping must be in (0, 1], got {}",
                self.player_damping
            ));
        }

        let spans = [
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_spin", self.obstacle_spin),
            ("vertex_jitter", self.vertex_jitter),
            ("debris_speed", self.debris_speed),
            ("debris_lifetime", self.debris_lifetime),
        ];
        for (name, span) in spans {
            if !span.is_valid() {
                return Err(format!(
                    "{name} must satisfy min < max, got {}..{}",
                    span.min, span.max
                ));
            }
        }
        if self.debris_lifetime.min <= 0.0 {
            return Err("debris_lifetime.min must be positive".to_string());
        }

        if self.vertices_min < 3 || self.vertices_min > self.vertices_max {
            return Err(format!(
                "polygon vertices must satisfy 3 <= min <= max, got {}..={}",
                self.vertices_min, self.vertices_max
            ));
        }
        if self.wave_base_count == 0 || self.wave_max_count < self.wave_base_count {
            return Err(format!(
                "wave counts must satisfy 0 < base <= max, got base {} max {}",
                self.wave_base_count, self.wave_max_count
            ));
        }
        if self.starting_lives == 0 {
            return Err("starting_lives must be at least 1".to_string());
        }

        Ok(())
    }
}
