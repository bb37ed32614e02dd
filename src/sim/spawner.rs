//! Wave, fragment, projectile and debris generation
//!
//! Every function takes the run's RNG explicitly so a seeded stream gives
//! identical waves, splits and explosions.

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Debris, Obstacle, ObstacleShape, Player, Projectile, SizeClass};
use super::motion::wrap_position;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Debris colors
pub mod colors {
    pub const NEUTRAL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_DEATH: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
}

/// Screen edge an obstacle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Number of obstacles that open level `level` (1-based)
pub fn wave_size(level: u32, tuning: &Tuning) -> u32 {
    let extra = level.saturating_sub(1).saturating_mul(tuning.wave_count_per_level);
    tuning
        .wave_base_count
        .saturating_add(extra)
        .min(tuning.wave_max_count)
}

pub fn radius_for(size: SizeClass, tuning: &Tuning) -> f32 {
    match size {
        SizeClass::Large => tuning.large_radius,
        SizeClass::Medium => tuning.medium_radius,
        SizeClass::Small => tuning.small_radius,
    }
}

pub fn points_for(size: SizeClass, tuning: &Tuning) -> u32 {
    match size {
        SizeClass::Large => tuning.large_points,
        SizeClass::Medium => tuning.medium_points,
        SizeClass::Small => tuning.small_points,
    }
}

/// Random polygon outline: vertex count and per-vertex radius jitter
pub fn obstacle_shape(rng: &mut impl Rng, tuning: &Tuning) -> ObstacleShape {
    let count = rng.random_range(tuning.vertices_min..=tuning.vertices_max) as usize;
    let vertex_scales = (0..count)
        .map(|_| rng.random_range(tuning.vertex_jitter.range()))
        .collect();
    ObstacleShape { vertex_scales }
}

/// Random direction scaled to a speed drawn from `speed`
fn random_velocity(rng: &mut impl Rng, speed: std::ops::Range<f32>) -> Vec2 {
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    let speed = rng.random_range(speed);
    polar_to_cartesian(speed, theta)
}

/// Build an obstacle at `pos` with freshly rolled velocity, spin and shape
pub fn spawn_obstacle(rng: &mut impl Rng, pos: Vec2, size: SizeClass, tuning: &Tuning) -> Obstacle {
    let vel = random_velocity(rng, tuning.obstacle_speed.range());
    let mut spin = rng.random_range(tuning.obstacle_spin.range());
    if rng.random_bool(0.5) {
        spin = -spin;
    }
    let shape = obstacle_shape(rng, tuning);

    Obstacle {
        body: Body::new(pos, vel, radius_for(size, tuning)),
        size,
        points: points_for(size, tuning),
        spin,
        shape,
    }
}

/// Random point on a uniformly chosen screen edge
pub fn edge_point(rng: &mut impl Rng, tuning: &Tuning) -> Vec2 {
    let w = tuning.world_width;
    let h = tuning.world_height;
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..w), 0.0),
        Edge::Right => Vec2::new(w, rng.random_range(0.0..h)),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..w), h),
        Edge::Left => Vec2::new(0.0, rng.random_range(0.0..h)),
    }
}

/// Push `point` away from `player` until it is at least `clearance` away.
/// A point sitting exactly on the player is pushed along +x.
pub fn enforce_clearance(point: Vec2, player: Vec2, clearance: f32) -> Vec2 {
    let offset = point - player;
    if offset.length() >= clearance {
        return point;
    }
    let dir = offset.try_normalize().unwrap_or(Vec2::X);
    player + dir * clearance
}

/// Generate the opening wave for `level`: all large, entering from the edges
pub fn spawn_wave(
    rng: &mut impl Rng,
    level: u32,
    player_pos: Vec2,
    tuning: &Tuning,
) -> Vec<Obstacle> {
    let count = wave_size(level, tuning);
    (0..count)
        .map(|_| {
            let pos = edge_point(rng, tuning);
            let pos = enforce_clearance(pos, player_pos, tuning.spawn_clearance);
            let pos = wrap_position(pos, tuning.world_width, tuning.world_height);
            spawn_obstacle(rng, pos, SizeClass::Large, tuning)
        })
        .collect()
}

/// Children of a destroyed obstacle: two of the next size down near the
/// parent's position, or none for the smallest size.
pub fn fragment(rng: &mut impl Rng, parent: &Obstacle, tuning: &Tuning) -> Vec<Obstacle> {
    let Some(child_size) = parent.size.next_smaller() else {
        return Vec::new();
    };

    (0..2)
        .map(|_| {
            let theta = rng.random_range(0.0..std::f32::consts::TAU);
            let pos = parent.body.pos + polar_to_cartesian(tuning.fragment_offset, theta);
            let pos = wrap_position(pos, tuning.world_width, tuning.world_height);
            spawn_obstacle(rng, pos, child_size, tuning)
        })
        .collect()
}

/// Burst of debris at `pos`
pub fn explosion(rng: &mut impl Rng, pos: Vec2, color: [f32; 4], tuning: &Tuning) -> Vec<Debris> {
    (0..tuning.debris_count)
        .map(|_| {
            let vel = random_velocity(rng, tuning.debris_speed.range());
            let lifetime = rng.random_range(tuning.debris_lifetime.range());
            Debris {
                body: Body::new(pos, vel, tuning.debris_radius),
                remaining: lifetime,
                max_lifetime: lifetime,
                color,
            }
        })
        .collect()
}

/// Shot leaving the player's nose along its heading
pub fn spawn_projectile(player: &Player, tuning: &Tuning) -> Projectile {
    let facing = player.facing();
    let pos = player.body.pos + facing * tuning.muzzle_offset;
    let mut body = Body::new(
        wrap_position(pos, tuning.world_width, tuning.world_height),
        facing * tuning.projectile_speed,
        tuning.projectile_radius,
    );
    body.rotation = player.body.rotation;
    Projectile {
        body,
        remaining: tuning.projectile_lifetime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_wave_size_progression() {
        let tuning = Tuning::default();
        assert_eq!(wave_size(1, &tuning), 4);
        assert_eq!(wave_size(2, &tuning), 6);
        assert_eq!(wave_size(4, &tuning), 10);
        assert_eq!(wave_size(5, &tuning), 12);
        assert_eq!(wave_size(50, &tuning), 12);
        assert_eq!(wave_size(u32::MAX, &tuning), 12);
    }

    #[test]
    fn test_wave_is_all_large_and_clear_of_player() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let center = Vec2::new(tuning.world_width / 2.0, tuning.world_height / 2.0);
        for level in 1..=6 {
            let wave = spawn_wave(&mut rng, level, center, &tuning);
            assert_eq!(wave.len() as u32, wave_size(level, &tuning));
            for obstacle in &wave {
                assert_eq!(obstacle.size, SizeClass::Large);
                assert_eq!(obstacle.points, 20);
                assert_eq!(obstacle.body.radius, tuning.large_radius);
                assert!(obstacle.body.pos.distance(center) >= tuning.spawn_clearance - 1e-3);
            }
        }
    }

    #[test]
    fn test_edge_points_lie_on_screen_border() {
        let tuning = Tuning::default();
        let mut rng = rng();
        for _ in 0..200 {
            let p = edge_point(&mut rng, &tuning);
            let on_vertical = p.x == 0.0 || p.x == tuning.world_width;
            let on_horizontal = p.y == 0.0 || p.y == tuning.world_height;
            assert!(on_vertical || on_horizontal, "{p} is not on an edge");
        }
    }

    #[test]
    fn test_clearance_pushes_along_player_direction() {
        let player = Vec2::new(100.0, 0.0);
        let pushed = enforce_clearance(Vec2::new(150.0, 0.0), player, 150.0);
        assert!((pushed - Vec2::new(250.0, 0.0)).length() < 1e-4);

        // Already far enough: untouched
        let far = Vec2::new(500.0, 0.0);
        assert_eq!(enforce_clearance(far, player, 150.0), far);

        // Degenerate: point on top of the player
        let pushed = enforce_clearance(player, player, 150.0);
        assert!((pushed.distance(player) - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_fragmentation_law() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let parent = spawn_obstacle(&mut rng, Vec2::new(500.0, 300.0), SizeClass::Large, &tuning);

        let children = fragment(&mut rng, &parent, &tuning);
        assert_eq!(children.len(), 2);
        for child in &children {
            assert_eq!(child.size, SizeClass::Medium);
            assert_eq!(child.points, 50);
            assert!(child.body.pos.distance(parent.body.pos) <= tuning.fragment_offset + 1e-3);
        }

        let grandchildren = fragment(&mut rng, &children[0], &tuning);
        assert_eq!(grandchildren.len(), 2);
        assert!(grandchildren.iter().all(|o| o.size == SizeClass::Small));

        assert!(fragment(&mut rng, &grandchildren[0], &tuning).is_empty());
    }

    #[test]
    fn test_obstacle_parameters_in_range() {
        let tuning = Tuning::default();
        let mut rng = rng();
        for _ in 0..200 {
            let o = spawn_obstacle(&mut rng, Vec2::new(10.0, 10.0), SizeClass::Small, &tuning);
            let speed = o.body.vel.length();
            assert!(speed >= tuning.obstacle_speed.min - 1e-3);
            assert!(speed <= tuning.obstacle_speed.max + 1e-3);
            assert!(o.spin.abs() >= tuning.obstacle_spin.min);
            assert!(o.spin.abs() < tuning.obstacle_spin.max);
            let n = o.shape.vertex_count() as u32;
            assert!((tuning.vertices_min..=tuning.vertices_max).contains(&n));
            assert!(
                o.shape
                    .vertex_scales
                    .iter()
                    .all(|s| (tuning.vertex_jitter.min..tuning.vertex_jitter.max).contains(s))
            );
        }
    }

    #[test]
    fn test_explosion_particles() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let at = Vec2::new(200.0, 200.0);
        let burst = explosion(&mut rng, at, colors::PLAYER_DEATH, &tuning);
        assert_eq!(burst.len() as u32, tuning.debris_count);
        for d in &burst {
            assert_eq!(d.body.pos, at);
            assert_eq!(d.color, colors::PLAYER_DEATH);
            assert_eq!(d.remaining, d.max_lifetime);
            assert!(tuning.debris_lifetime.range().contains(&d.max_lifetime));
            let speed = d.body.vel.length();
            assert!(speed >= tuning.debris_speed.min - 1e-3 && speed <= tuning.debris_speed.max + 1e-3);
        }
    }

    #[test]
    fn test_projectile_leaves_nose() {
        let tuning = Tuning::default();
        // Facing up (270°)
        let player = Player::new(Vec2::new(512.0, 384.0), 15.0, 270.0, 3);
        let shot = spawn_projectile(&player, &tuning);
        assert!((shot.body.pos - Vec2::new(512.0, 364.0)).length() < 1e-3);
        assert!((shot.body.vel - Vec2::new(0.0, -600.0)).length() < 1e-2);
        assert_eq!(shot.remaining, tuning.projectile_lifetime);
    }

    #[test]
    fn test_same_seed_same_wave() {
        let tuning = Tuning::default();
        let center = Vec2::new(512.0, 384.0);
        let a = spawn_wave(&mut Pcg32::seed_from_u64(7), 3, center, &tuning);
        let b = spawn_wave(&mut Pcg32::seed_from_u64(7), 3, center, &tuning);
        assert_eq!(a, b);
    }
}
