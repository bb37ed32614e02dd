//! Collision detection and resolution
//!
//! Plain circle overlap, pairwise, no penetration depth. Each pair either
//! resolves completely this frame or not at all. Ties are broken by
//! iteration order, not by distance: a projectile takes out the first live
//! obstacle it overlaps, and the player is hit by the first live obstacle
//! it overlaps. Several obstacles overlapping the player in one frame still
//! cost only one life.

use glam::Vec2;

use super::entity::Obstacle;
use super::spawner::{self, colors};
use super::state::{GameEvent, GameState};

/// What happened in one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Obstacles destroyed by projectiles
    pub obstacles_destroyed: u32,
    /// Points added to the score
    pub points: u64,
    /// Whether the player lost a life
    pub player_hit: bool,
}

/// Index of the first live obstacle overlapping `body`, in iteration order
fn first_hit(obstacles: &[Obstacle], body: &super::entity::Body) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| o.body.is_alive() && body.collides_with(&o.body))
}

/// Resolve projectile hits, then the player hit. Pure state transformation;
/// cannot fail.
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();

    // Projectiles vs obstacles. Fragments are appended as they are created,
    // so later projectiles this frame can already hit them.
    for shot_idx in 0..state.projectiles.len() {
        if !state.projectiles[shot_idx].body.is_alive() {
            continue;
        }
        let Some(hit_idx) = first_hit(&state.obstacles, &state.projectiles[shot_idx].body) else {
            continue;
        };

        state.projectiles[shot_idx].body.mark_dead();
        destroy_obstacle(state, hit_idx, &mut report);
    }

    // Player vs obstacles
    if !state.player.invulnerable && state.player.body.is_alive() {
        if let Some(hit_idx) = first_hit(&state.obstacles, &state.player.body) {
            state.obstacles[hit_idx].body.mark_dead();
            hit_player(state);
            report.player_hit = true;
        }
    }

    report
}

/// Score, split and blow up the obstacle at `idx`
fn destroy_obstacle(state: &mut GameState, idx: usize, report: &mut CollisionReport) {
    let (size, points, pos) = {
        let obstacle = &state.obstacles[idx];
        (obstacle.size, obstacle.points, obstacle.body.pos)
    };

    state.score += u64::from(points);
    report.points += u64::from(points);
    report.obstacles_destroyed += 1;

    let children = spawner::fragment(&mut state.rng, &state.obstacles[idx], &state.tuning);
    let burst = spawner::explosion(&mut state.rng, pos, colors::NEUTRAL, &state.tuning);
    state.obstacles[idx].body.mark_dead();
    state.obstacles.extend(children);
    state.debris.extend(burst);

    log::debug!("Destroyed {} obstacle (+{points})", size.as_str());
    state
        .events
        .push(GameEvent::ObstacleDestroyed { size, points, pos });
}

/// Take a life, explode in red, respawn at centre with invulnerability
fn hit_player(state: &mut GameState) {
    let pos: Vec2 = state.player.body.pos;
    let burst = spawner::explosion(&mut state.rng, pos, colors::PLAYER_DEATH, &state.tuning);
    state.debris.extend(burst);

    state.player.lose_life();
    state.reset_player_pose();

    let lives_left = state.player.lives;
    log::info!("Player hit, {lives_left} lives left");
    state.events.push(GameEvent::PlayerHit { lives_left });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Body, Projectile, SizeClass};
    use crate::sim::state::GameMode;

    /// Playing state with no obstacles and a vulnerable player at centre
    fn bare_state() -> GameState {
        let mut state = GameState::new(42);
        state.mode = GameMode::Playing;
        state.player.invulnerable = false;
        state.player.invulnerability_remaining = 0.0;
        state
    }

    fn obstacle_at(state: &mut GameState, pos: Vec2, size: SizeClass) {
        let obstacle = spawner::spawn_obstacle(&mut state.rng, pos, size, &state.tuning);
        state.obstacles.push(obstacle);
    }

    fn shot_at(state: &mut GameState, pos: Vec2) {
        state.projectiles.push(Projectile {
            body: Body::new(pos, Vec2::ZERO, state.tuning.projectile_radius),
            remaining: 1.0,
        });
    }

    #[test]
    fn test_projectile_destroys_large_for_20() {
        let mut state = bare_state();
        obstacle_at(&mut state, Vec2::new(100.0, 100.0), SizeClass::Large);
        shot_at(&mut state, Vec2::new(105.0, 100.0));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.points, 20);
        assert_eq!(state.score, 20);
        assert!(!state.projectiles[0].body.is_alive());
        assert!(!state.obstacles[0].body.is_alive());

        // Two medium fragments appended after the parent
        let live: Vec<_> = state.obstacles.iter().filter(|o| o.body.is_alive()).collect();
        assert_eq!(live.len(), 2);
        assert!(live.iter().all(|o| o.size == SizeClass::Medium));
        assert_eq!(state.debris.len() as u32, state.tuning.debris_count);
        assert!(state.debris.iter().all(|d| d.color == colors::NEUTRAL));
    }

    #[test]
    fn test_small_obstacle_leaves_no_fragments() {
        let mut state = bare_state();
        obstacle_at(&mut state, Vec2::new(100.0, 100.0), SizeClass::Small);
        shot_at(&mut state, Vec2::new(100.0, 100.0));

        resolve_collisions(&mut state);
        assert_eq!(state.score, 100);
        assert_eq!(state.live_obstacle_count(), 0);
    }

    #[test]
    fn test_one_obstacle_per_projectile_first_in_order() {
        let mut state = bare_state();
        // Two overlapping small obstacles; the second is closer to the shot
        obstacle_at(&mut state, Vec2::new(100.0, 100.0), SizeClass::Small);
        obstacle_at(&mut state, Vec2::new(104.0, 100.0), SizeClass::Small);
        shot_at(&mut state, Vec2::new(105.0, 100.0));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.obstacles_destroyed, 1);
        assert!(!state.obstacles[0].body.is_alive());
        assert!(state.obstacles[1].body.is_alive());
    }

    #[test]
    fn test_later_projectile_can_hit_fresh_fragment() {
        let mut state = bare_state();
        state.tuning.fragment_offset = 0.0;
        obstacle_at(&mut state, Vec2::new(300.0, 300.0), SizeClass::Medium);
        shot_at(&mut state, Vec2::new(300.0, 300.0));
        shot_at(&mut state, Vec2::new(300.0, 300.0));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.obstacles_destroyed, 2);
        assert_eq!(state.score, 50 + 100);
        assert_eq!(state.live_obstacle_count(), 1);
    }

    #[test]
    fn test_dead_projectile_is_ignored() {
        let mut state = bare_state();
        obstacle_at(&mut state, Vec2::new(100.0, 100.0), SizeClass::Large);
        shot_at(&mut state, Vec2::new(100.0, 100.0));
        state.projectiles[0].body.mark_dead();

        let report = resolve_collisions(&mut state);
        assert_eq!(report, CollisionReport::default());
        assert!(state.obstacles[0].body.is_alive());
    }

    #[test]
    fn test_player_hit_costs_one_life() {
        let mut state = bare_state();
        let center = state.spawn_point();
        obstacle_at(&mut state, center + Vec2::new(10.0, 0.0), SizeClass::Large);
        obstacle_at(&mut state, center - Vec2::new(10.0, 0.0), SizeClass::Large);
        state.player.body.vel = Vec2::new(50.0, 0.0);

        let report = resolve_collisions(&mut state);
        assert!(report.player_hit);
        assert_eq!(state.player.lives, 2);
        assert!(!state.obstacles[0].body.is_alive());
        assert!(state.obstacles[1].body.is_alive());
        assert!(state.player.invulnerable);
        assert_eq!(state.player.body.pos, center);
        assert_eq!(state.player.body.vel, Vec2::ZERO);
        assert!(state.debris.iter().all(|d| d.color == colors::PLAYER_DEATH));
        // Player collisions score nothing
        assert_eq!(state.score, 0);
        assert!(state.events.contains(&GameEvent::PlayerHit { lives_left: 2 }));
    }

    #[test]
    fn test_invulnerable_player_ignores_overlap() {
        let mut state = bare_state();
        state.player.make_invulnerable(1.5);
        let center = state.spawn_point();
        obstacle_at(&mut state, center, SizeClass::Large);

        let report = resolve_collisions(&mut state);
        assert!(!report.player_hit);
        assert_eq!(state.player.lives, 3);
        assert!(state.obstacles[0].body.is_alive());
    }

    #[test]
    fn test_last_life_reaches_zero() {
        let mut state = bare_state();
        state.player.lives = 1;
        let center = state.spawn_point();
        obstacle_at(&mut state, center, SizeClass::Small);

        resolve_collisions(&mut state);
        assert_eq!(state.player.lives, 0);
    }
}
