//! Render collaborator boundary
//!
//! The simulation never draws. Each frame it is flattened into a
//! [`RenderFrame`]: one [`RenderItem`] per live entity plus the HUD values,
//! which a backend consumes through [`RenderSink`]. Nothing here mutates
//! game state.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{EntityKind, GameMode, GameState, ObstacleShape, SizeClass};
pub use vertex::Vertex;

/// Kind-specific visual parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Visual {
    Player { visible: bool, thrusting: bool },
    Obstacle { size: SizeClass, shape: ObstacleShape },
    Projectile,
    Debris { color: [f32; 4], opacity: f32 },
}

/// One thing to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    pub radius: f32,
    pub visual: Visual,
}

/// HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub mode: GameMode,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub level_intro_remaining: f32,
}

/// Everything a backend needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub items: Vec<RenderItem>,
    pub hud: Hud,
}

/// Receives a frame's draw list
pub trait RenderSink {
    fn draw(&mut self, item: &RenderItem);
    fn hud(&mut self, hud: &Hud);
}

/// Flatten the game state into a draw list. Obstacles first, then
/// projectiles, debris, and the player on top. The player is left out on
/// the menu and game-over screens.
pub fn frame(state: &GameState) -> RenderFrame {
    let mut items = Vec::with_capacity(
        state.obstacles.len() + state.projectiles.len() + state.debris.len() + 1,
    );

    for obstacle in state.obstacles.iter().filter(|o| o.body.is_alive()) {
        items.push(RenderItem {
            kind: EntityKind::Obstacle,
            pos: obstacle.body.pos,
            rotation: obstacle.body.rotation,
            radius: obstacle.body.radius,
            visual: Visual::Obstacle {
                size: obstacle.size,
                shape: obstacle.shape.clone(),
            },
        });
    }

    for shot in state.projectiles.iter().filter(|p| p.body.is_alive()) {
        items.push(RenderItem {
            kind: EntityKind::Projectile,
            pos: shot.body.pos,
            rotation: shot.body.rotation,
            radius: shot.body.radius,
            visual: Visual::Projectile,
        });
    }

    for debris in state.debris.iter().filter(|d| d.body.is_alive()) {
        items.push(RenderItem {
            kind: EntityKind::Debris,
            pos: debris.body.pos,
            rotation: debris.body.rotation,
            radius: debris.body.radius,
            visual: Visual::Debris {
                color: debris.color,
                opacity: debris.opacity(),
            },
        });
    }

    if matches!(state.mode, GameMode::Playing | GameMode::Paused) {
        let player = &state.player;
        items.push(RenderItem {
            kind: EntityKind::Player,
            pos: player.body.pos,
            rotation: player.body.rotation,
            radius: player.body.radius,
            visual: Visual::Player {
                visible: player.visible(),
                thrusting: player.thrusting,
            },
        });
    }

    RenderFrame {
        items,
        hud: Hud {
            mode: state.mode,
            score: state.score,
            lives: state.player.lives,
            level: state.level,
            level_intro_remaining: state.level_intro_remaining,
        },
    }
}

/// Hand a frame to a backend
pub fn submit(frame: &RenderFrame, sink: &mut dyn RenderSink) {
    for item in &frame.items {
        sink.draw(item);
    }
    sink.hud(&frame.hud);
}

/// Line-list vertices for one item (for GPU backends)
pub fn item_vertices(item: &RenderItem) -> Vec<Vertex> {
    match &item.visual {
        Visual::Player { visible, thrusting } => {
            if *visible {
                shapes::ship_outline(item.pos, item.rotation, *thrusting, vertex::colors::SHIP)
            } else {
                Vec::new()
            }
        }
        Visual::Obstacle { shape, .. } => shapes::obstacle_outline(
            item.pos,
            item.radius,
            item.rotation,
            shape,
            vertex::colors::OBSTACLE,
        ),
        Visual::Projectile => {
            shapes::circle_outline(item.pos, item.radius, vertex::colors::PROJECTILE, 6)
        }
        Visual::Debris { color, opacity } => {
            let faded = [color[0], color[1], color[2], color[3] * opacity];
            shapes::circle_outline(item.pos, item.radius, faded, 4)
        }
    }
}
