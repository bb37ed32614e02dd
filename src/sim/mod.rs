//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-clamped timestep
//! - Seeded RNG only, threaded explicitly
//! - Stable iteration order (insertion order per collection)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod motion;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve_collisions};
pub use entity::{
    Body, Debris, EntityKind, EntityMut, Obstacle, ObstacleShape, Player, Projectile, SizeClass,
};
pub use motion::{integrate_all, integrate_body, integrate_player, wrap_position};
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{FrameOutcome, TickInput, tick};
