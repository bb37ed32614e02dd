//! Motion integration and screen wrap
//!
//! Explicit Euler step followed by a hard snap to the opposite edge. The
//! snap happens at most once per axis per step, so a body moving more than
//! a screen width in one frame still lands inside the world; the frame-time
//! clamp upstream keeps that from mattering in play.

use glam::Vec2;

use super::entity::{Body, EntityMut, Player};
use crate::consts::REFERENCE_FPS;
use crate::tuning::Tuning;

/// Wrap a position into `[0, width) × [0, height)`
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, width), wrap_axis(pos.y, height))
}

#[inline]
fn wrap_axis(value: f32, edge: f32) -> f32 {
    if value < 0.0 {
        just_below(edge)
    } else if value >= edge {
        0.0
    } else {
        value
    }
}

/// Largest float strictly less than a positive `edge`. An absolute inset
/// would round back onto the edge once the float spacing there exceeds it.
#[inline]
fn just_below(edge: f32) -> f32 {
    if edge > 0.0 && edge.is_finite() {
        f32::from_bits(edge.to_bits() - 1)
    } else {
        0.0
    }
}

/// Advance a live body by `dt` and wrap it. Dead bodies are left alone.
pub fn integrate_body(body: &mut Body, dt: f32, tuning: &Tuning) {
    if !body.is_alive() {
        return;
    }
    body.pos += body.vel * dt;
    body.pos = wrap_position(body.pos, tuning.world_width, tuning.world_height);
}

/// Player motion: the plain step plus damping toward rest and a speed cap
pub fn integrate_player(player: &mut Player, dt: f32, tuning: &Tuning) {
    integrate_body(&mut player.body, dt, tuning);

    // Damping is tuned per 1/60 s frame; scale so behaviour holds at any dt
    let damping = tuning.player_damping.powf(dt * REFERENCE_FPS);
    player.body.vel *= damping;
    player.body.vel = player.body.vel.clamp_length_max(tuning.player_max_speed);
}

/// Integrate one entity of any kind, then run its own countdowns
pub fn integrate_entity(entity: EntityMut<'_>, dt: f32, tuning: &Tuning) {
    match entity {
        EntityMut::Player(player) => {
            integrate_player(player, dt, tuning);
            player.update_timers(dt);
        }
        EntityMut::Obstacle(obstacle) => {
            integrate_body(&mut obstacle.body, dt, tuning);
            obstacle.update(dt);
        }
        EntityMut::Projectile(shot) => {
            integrate_body(&mut shot.body, dt, tuning);
            shot.update(dt);
        }
        EntityMut::Debris(debris) => {
            integrate_body(&mut debris.body, dt, tuning);
            debris.update(dt);
        }
    }
}

/// Integrate every live entity
pub fn integrate_all<'a>(
    entities: impl Iterator<Item = EntityMut<'a>>,
    dt: f32,
    tuning: &Tuning,
) {
    for entity in entities {
        if entity.body().is_alive() {
            integrate_entity(entity, dt, tuning);
        }
    }
}
