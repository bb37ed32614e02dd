//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`], including the
//! run's single RNG stream.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Debris, EntityMut, Obstacle, Player, Projectile, SizeClass};
use super::spawner;
use crate::audio::SoundCue;
use crate::tuning::Tuning;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for start
    MainMenu,
    /// Active gameplay
    Playing,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// Out of lives, waiting for start
    GameOver,
}

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ModeChanged { from: GameMode, to: GameMode },
    LevelStarted { level: u32, obstacles: u32 },
    ProjectileFired,
    ObstacleDestroyed { size: SizeClass, points: u32, pos: Vec2 },
    PlayerHit { lives_left: u32 },
}

impl GameEvent {
    /// Sound cue for the audio collaborator, if this event has one
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::ProjectileFired => Some(SoundCue::Fire),
            GameEvent::ObstacleDestroyed { size, .. } => Some(SoundCue::explosion(*size)),
            GameEvent::PlayerHit { .. } => Some(SoundCue::ExplosionLarge),
            GameEvent::ModeChanged { .. } | GameEvent::LevelStarted { .. } => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub mode: GameMode,
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Seconds of wave-intro freeze left
    pub level_intro_remaining: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub projectiles: Vec<Projectile>,
    pub debris: Vec<Debris>,
    /// Events recorded since the driver last drained them
    pub events: Vec<GameEvent>,
    /// Gameplay frames simulated this run (intro and level-advance frames
    /// not included)
    pub frame_count: u64,
}

impl GameState {
    /// Create a new game sitting at the main menu
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a game with custom balance. Tuning that fails validation
    /// would make wave generation sample empty ranges, so it is replaced by
    /// the defaults.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({e}), using defaults");
                Tuning::default()
            }
        };
        let player = Player::new(
            spawn_point(&tuning),
            tuning.player_radius,
            crate::consts::PLAYER_SPAWN_ROTATION,
            tuning.starting_lives,
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            mode: GameMode::MainMenu,
            score: 0,
            level: 1,
            level_intro_remaining: 0.0,
            player,
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            debris: Vec::new(),
            events: Vec::new(),
            frame_count: 0,
        }
    }

    /// Screen-centre spawn point for the player
    pub fn spawn_point(&self) -> Vec2 {
        spawn_point(&self.tuning)
    }

    /// Fresh run: score, level and lives back to their starting values,
    /// every non-player entity cleared, level 1 wave generated.
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.level = 1;
        self.frame_count = 0;
        self.player.lives = self.tuning.starting_lives;
        self.player.fire_cooldown = 0.0;
        self.reset_player_pose();
        self.obstacles.clear();
        self.projectiles.clear();
        self.debris.clear();
        log::info!("New run (seed {})", self.seed);
        self.start_level();
    }

    /// Replace the obstacle field with the opening wave for the current
    /// level and restart the intro freeze
    pub fn start_level(&mut self) {
        self.obstacles =
            spawner::spawn_wave(&mut self.rng, self.level, self.player.body.pos, &self.tuning);
        self.level_intro_remaining = self.tuning.level_intro_duration;
        let obstacles = self.obstacles.len() as u32;
        log::info!("Level {} starting with {} obstacles", self.level, obstacles);
        self.events.push(GameEvent::LevelStarted {
            level: self.level,
            obstacles,
        });
    }

    pub fn reset_player_pose(&mut self) {
        let spawn = self.spawn_point();
        self.player.reset_pose(
            spawn,
            crate::consts::PLAYER_SPAWN_ROTATION,
            self.tuning.invulnerability_time,
        );
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::debug!("Mode {:?} -> {:?}", self.mode, mode);
            self.events.push(GameEvent::ModeChanged {
                from: self.mode,
                to: mode,
            });
            self.mode = mode;
        }
    }

    pub fn live_obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.body.is_alive()).count()
    }

    /// Every entity, player first, then obstacles, projectiles, debris
    pub fn entities_mut(&mut self) -> impl Iterator<Item = EntityMut<'_>> {
        std::iter::once(EntityMut::Player(&mut self.player))
            .chain(self.obstacles.iter_mut().map(EntityMut::Obstacle))
            .chain(self.projectiles.iter_mut().map(EntityMut::Projectile))
            .chain(self.debris.iter_mut().map(EntityMut::Debris))
    }

    /// Evict dead entities from every collection. The player is a singleton
    /// and is never evicted.
    pub fn remove_dead(&mut self) {
        self.obstacles.retain(|o| o.body.is_alive());
        self.projectiles.retain(|p| p.body.is_alive());
        self.debris.retain(|d| d.body.is_alive());
    }

    /// Take the events recorded so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn spawn_point(tuning: &Tuning) -> Vec2 {
    Vec2::new(tuning.world_width / 2.0, tuning.world_height / 2.0)
}
