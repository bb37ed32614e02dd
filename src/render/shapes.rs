//! Outline generation for 2D primitives
//!
//! Everything is emitted as a line list (pairs of vertices) in world
//! coordinates, already rotated and translated.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::ObstacleShape;

/// Ship hull in local space: nose, left wing, right wing (facing +x)
const SHIP_HULL: [Vec2; 3] = [
    Vec2::new(20.0, 0.0),
    Vec2::new(-10.0, -10.0),
    Vec2::new(-10.0, 10.0),
];

/// Exhaust flame in local space
const SHIP_FLAME: [Vec2; 3] = [
    Vec2::new(-10.0, 0.0),
    Vec2::new(-20.0, -5.0),
    Vec2::new(-20.0, 5.0),
];

/// Rotate `local` by `degrees` and move it to `center`
#[inline]
fn place(local: Vec2, center: Vec2, degrees: f32) -> Vec2 {
    center + Vec2::from_angle(degrees.to_radians()).rotate(local)
}

/// Closed polygon through `points` as a line list
fn closed_loop(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

/// Jagged rock outline
pub fn obstacle_outline(
    center: Vec2,
    radius: f32,
    degrees: f32,
    shape: &ObstacleShape,
    color: [f32; 4],
) -> Vec<Vertex> {
    let n = shape.vertex_count();
    if n < 3 {
        return circle_outline(center, radius, color, 12);
    }
    let points: Vec<Vec2> = shape
        .vertex_scales
        .iter()
        .enumerate()
        .map(|(i, scale)| {
            let theta = i as f32 * TAU / n as f32;
            let local = Vec2::from_angle(theta) * radius * *scale;
            place(local, center, degrees)
        })
        .collect();
    closed_loop(&points, color)
}

/// Triangle ship, plus the exhaust flame when thrusting
pub fn ship_outline(center: Vec2, degrees: f32, thrusting: bool, color: [f32; 4]) -> Vec<Vertex> {
    let hull: Vec<Vec2> = SHIP_HULL.iter().map(|p| place(*p, center, degrees)).collect();
    let mut vertices = closed_loop(&hull, color);
    if thrusting {
        let flame: Vec<Vec2> = SHIP_FLAME.iter().map(|p| place(*p, center, degrees)).collect();
        vertices.extend(closed_loop(&flame, super::vertex::colors::FLAME));
    }
    vertices
}

/// Regular polygon approximating a circle
pub fn circle_outline(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let points: Vec<Vec2> = (0..segments)
        .map(|i| center + Vec2::from_angle(i as f32 * TAU / segments as f32) * radius)
        .collect();
    closed_loop(&points, color)
}
