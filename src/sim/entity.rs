//! Entity model shared by every moving thing in the world
//!
//! All kinds carry a [`Body`] (position, velocity, heading, radius, liveness)
//! and add their own countdowns. Kinds are a closed set; code that has to
//! treat them uniformly goes through [`EntityMut`] and matches exhaustively.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Entity kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Obstacle,
    Projectile,
    Debris,
}

/// Shared state for every entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, kept in [0, 360)
    pub rotation: f32,
    pub radius: f32,
    alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
            radius,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the entity dead. Idempotent, and there is no way back.
    #[inline]
    pub fn mark_dead(&mut self) {
        self.alive = false;
    }

    /// Circle overlap test: strictly closer than the sum of radii
    #[inline]
    pub fn collides_with(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Rotate by `delta` degrees, keeping the heading normalized
    #[inline]
    pub fn rotate(&mut self, delta: f32) {
        self.rotation = normalize_degrees(self.rotation + delta);
    }
}

/// Obstacle size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    /// Size of the fragments this obstacle splits into, if any
    pub fn next_smaller(self) -> Option<SizeClass> {
        match self {
            SizeClass::Large => Some(SizeClass::Medium),
            SizeClass::Medium => Some(SizeClass::Small),
            SizeClass::Small => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Large => "large",
            SizeClass::Medium => "medium",
            SizeClass::Small => "small",
        }
    }
}

/// Polygon outline parameters for the renderer. Not used by collisions,
/// which always use the body radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleShape {
    /// Radius multiplier per vertex, evenly spaced around the circle
    pub vertex_scales: Vec<f32>,
}

impl ObstacleShape {
    /// Regular polygon with `n` vertices (no jitter)
    pub fn regular(n: usize) -> Self {
        Self {
            vertex_scales: vec![1.0; n],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_scales.len()
    }
}

/// A drifting rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    pub size: SizeClass,
    /// Points awarded for destroying it
    pub points: u32,
    /// Degrees per second, signed
    pub spin: f32,
    pub shape: ObstacleShape,
}

impl Obstacle {
    pub fn update(&mut self, dt: f32) {
        self.body.rotate(self.spin * dt);
    }
}

/// A shot fired by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Seconds left before it fizzles
    pub remaining: f32,
}

impl Projectile {
    pub fn update(&mut self, dt: f32) {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.body.mark_dead();
        }
    }
}

/// Cosmetic explosion particle. Never collides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debris {
    pub body: Body,
    pub remaining: f32,
    pub max_lifetime: f32,
    /// RGBA, alpha is replaced by [`Debris::opacity`] when drawn
    pub color: [f32; 4],
}

impl Debris {
    pub fn update(&mut self, dt: f32) {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.body.mark_dead();
        }
    }

    /// Linear fade from 1 at spawn to 0 at expiry
    pub fn opacity(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.max_lifetime).clamp(0.0, 1.0)
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub lives: u32,
    pub invulnerable: bool,
    pub invulnerability_remaining: f32,
    pub fire_cooldown: f32,
    /// Drives the blink while invulnerable
    pub blink_timer: f32,
    /// Thrust held this frame (exhaust flame)
    pub thrusting: bool,
}

impl Player {
    pub fn new(spawn: Vec2, radius: f32, rotation: f32, lives: u32) -> Self {
        let mut body = Body::new(spawn, Vec2::ZERO, radius);
        body.rotation = normalize_degrees(rotation);
        Self {
            body,
            lives,
            invulnerable: false,
            invulnerability_remaining: 0.0,
            fire_cooldown: 0.0,
            blink_timer: 0.0,
            thrusting: false,
        }
    }

    /// Put the ship back at its spawn pose with a fresh invulnerability window
    pub fn reset_pose(&mut self, spawn: Vec2, rotation: f32, invulnerability: f32) {
        self.body.pos = spawn;
        self.body.vel = Vec2::ZERO;
        self.body.rotation = normalize_degrees(rotation);
        self.thrusting = false;
        self.make_invulnerable(invulnerability);
    }

    pub fn make_invulnerable(&mut self, duration: f32) {
        self.invulnerable = duration > 0.0;
        self.invulnerability_remaining = duration.max(0.0);
        self.blink_timer = crate::consts::PLAYER_BLINK_PERIOD;
    }

    /// Lose one life, never going below zero
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown <= 0.0
    }

    /// Unit vector the nose points along
    pub fn facing(&self) -> Vec2 {
        crate::heading_to_vec(self.body.rotation)
    }

    /// Count down cooldown and invulnerability timers
    pub fn update_timers(&mut self, dt: f32) {
        if self.fire_cooldown > 0.0 {
            self.fire_cooldown -= dt;
        }

        if self.invulnerable {
            self.invulnerability_remaining -= dt;
            self.blink_timer -= dt;
            if self.blink_timer <= 0.0 {
                self.blink_timer = crate::consts::PLAYER_BLINK_PERIOD;
            }
            if self.invulnerability_remaining <= 0.0 {
                self.invulnerable = false;
                self.invulnerability_remaining = 0.0;
            }
        }
    }

    /// False during the "off" half of the invulnerability blink
    pub fn visible(&self) -> bool {
        !(self.invulnerable && self.blink_timer > crate::consts::PLAYER_BLINK_PERIOD * 0.5)
    }
}

/// Mutable view over any entity, for passes that touch every kind
pub enum EntityMut<'a> {
    Player(&'a mut Player),
    Obstacle(&'a mut Obstacle),
    Projectile(&'a mut Projectile),
    Debris(&'a mut Debris),
}

impl EntityMut<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityMut::Player(_) => EntityKind::Player,
            EntityMut::Obstacle(_) => EntityKind::Obstacle,
            EntityMut::Projectile(_) => EntityKind::Projectile,
            EntityMut::Debris(_) => EntityKind::Debris,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            EntityMut::Player(p) => &p.body,
            EntityMut::Obstacle(o) => &o.body,
            EntityMut::Projectile(p) => &p.body,
            EntityMut::Debris(d) => &d.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32, r: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, r)
    }

    #[test]
    fn test_mark_dead_is_idempotent() {
        let mut body = body_at(0.0, 0.0, 1.0);
        assert!(body.is_alive());
        body.mark_dead();
        body.mark_dead();
        assert!(!body.is_alive());
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        // Exactly touching is not an overlap
        let a = body_at(0.0, 0.0, 5.0);
        let b = body_at(10.0, 0.0, 5.0);
        assert!(!a.collides_with(&b));
        let c = body_at(9.99, 0.0, 5.0);
        assert!(a.collides_with(&c));
    }

    #[test]
    fn test_fragment_sizes() {
        assert_eq!(SizeClass::Large.next_smaller(), Some(SizeClass::Medium));
        assert_eq!(SizeClass::Medium.next_smaller(), Some(SizeClass::Small));
        assert_eq!(SizeClass::Small.next_smaller(), None);
    }

    #[test]
    fn test_projectile_expires_at_zero() {
        let mut shot = Projectile {
            body: body_at(0.0, 0.0, 2.0),
            remaining: 0.1,
        };
        shot.update(0.05);
        assert!(shot.body.is_alive());
        shot.update(0.05);
        assert!(!shot.body.is_alive());
    }

    #[test]
    fn test_debris_fades_linearly() {
        let mut debris = Debris {
            body: body_at(0.0, 0.0, 1.0),
            remaining: 1.0,
            max_lifetime: 1.0,
            color: [1.0; 4],
        };
        assert!((debris.opacity() - 1.0).abs() < 1e-6);
        debris.update(0.25);
        assert!((debris.opacity() - 0.75).abs() < 1e-6);
        debris.update(1.0);
        assert_eq!(debris.opacity(), 0.0);
        assert!(!debris.body.is_alive());
    }

    #[test]
    fn test_invulnerability_expires() {
        let mut player = Player::new(Vec2::ZERO, 15.0, 270.0, 3);
        player.make_invulnerable(0.2);
        assert!(player.invulnerable);
        player.update_timers(0.1);
        assert!(player.invulnerable);
        player.update_timers(0.11);
        assert!(!player.invulnerable);
        assert!(player.visible());
    }

    #[test]
    fn test_lives_never_below_zero() {
        let mut player = Player::new(Vec2::ZERO, 15.0, 0.0, 1);
        player.lose_life();
        player.lose_life();
        assert_eq!(player.lives, 0);
    }

    #[test]
    fn test_pose_reset_does_not_revive() {
        let mut player = Player::new(Vec2::ZERO, 15.0, 0.0, 3);
        player.body.mark_dead();
        player.reset_pose(Vec2::new(512.0, 384.0), 270.0, 3.0);
        assert!(!player.body.is_alive());
        assert_eq!(player.body.pos, Vec2::new(512.0, 384.0));
        assert!(player.invulnerable);
    }

    #[test]
    fn test_entity_mut_kind_tags() {
        let mut shot = Projectile {
            body: body_at(1.0, 2.0, 2.0),
            remaining: 1.0,
        };
        let view = EntityMut::Projectile(&mut shot);
        assert_eq!(view.kind(), EntityKind::Projectile);
        assert_eq!(view.body().pos, Vec2::new(1.0, 2.0));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -2000.0f32..2000.0, ay in -2000.0f32..2000.0, ar in 0.1f32..100.0,
            bx in -2000.0f32..2000.0, by in -2000.0f32..2000.0, br in 0.1f32..100.0,
        ) {
            let a = body_at(ax, ay, ar);
            let b = body_at(bx, by, br);
            prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
        }

        #[test]
        fn prop_rotation_stays_normalized(start in 0.0f32..360.0, delta in -10000.0f32..10000.0) {
            let mut body = body_at(0.0, 0.0, 1.0);
            body.rotation = start;
            body.rotate(delta);
            prop_assert!(body.rotation >= 0.0 && body.rotation < 360.0);
        }
    }
}
