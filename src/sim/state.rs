//! Game state and core simulation types
//!
//! One [`GameState`] per session; nothing in here outlives it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::levels::DifficultyLevel;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, one transition per display frame
    Running,
    /// Score goal reached
    Won,
    /// Character hit an obstacle
    Lost,
}

impl GamePhase {
    /// Terminal phases process no further frames
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Viewport dimensions in pixels, supplied by the shell each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The character's rest line
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_CLEARANCE
    }
}

/// The player character: a circle with vertical-only physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    /// Center position; `pos.x` never changes during a session
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity, pixels per frame (negative = upward)
    pub vel_y: f32,
    /// Set by a jump, cleared on landing; further jumps are rejected while set
    pub airborne: bool,
}

impl Character {
    /// New character resting on the ground line
    pub fn new(ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(CHARACTER_X, ground_y),
            radius: CHARACTER_RADIUS,
            vel_y: 0.0,
            airborne: false,
        }
    }

    /// Put the character back on the ground line, at rest
    pub fn reset_to_ground(&mut self, ground_y: f32) {
        self.pos.y = ground_y;
        self.vel_y = 0.0;
        self.airborne = false;
    }

    /// Apply the jump impulse. No-op while airborne: no mid-air re-jumps.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel_y = JUMP_IMPULSE;
            self.airborne = true;
        }
    }

    /// Advance vertical physics by one frame: gravity, then displacement,
    /// then the ground clamp. Runs unconditionally every frame.
    pub fn integrate(&mut self, ground_y: f32) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        if self.pos.y > ground_y {
            self.reset_to_ground(ground_y);
        }
    }
}

/// A spawned obstacle: a rectangle sliding leftward along the ground strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width/height, randomized once at spawn
    pub size: Vec2,
    /// Leftward speed, fixed for this instance's lifetime
    pub speed: f32,
}

impl Obstacle {
    /// Spawn a new obstacle just past the right edge of the viewport, its
    /// base resting on the ground strip.
    pub fn spawn(view: Viewport, speed: f32, rng: &mut impl Rng) -> Self {
        let width = rng.random_range(OBSTACLE_WIDTH_MIN..OBSTACLE_WIDTH_MAX);
        let height = rng.random_range(OBSTACLE_HEIGHT_MIN..OBSTACLE_HEIGHT_MAX);
        Self {
            pos: Vec2::new(view.width + width, view.height - height - GROUND_STRIP_HEIGHT),
            size: Vec2::new(width, height),
            speed,
        }
    }

    /// Slide left by one frame's worth of speed
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    /// True once the obstacle is fully past the left edge
    pub fn is_expired(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Difficulty entry chosen at start
    pub level: &'static DifficultyLevel,
    /// Viewport as of the latest frame
    pub view: Viewport,
    pub phase: GamePhase,
    /// Obstacles dodged so far
    pub score: u32,
    /// Monotonic frame counter, resets per session
    pub frame_count: u64,
    pub character: Character,
    /// Active obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    rng: Pcg32,
}

impl GameState {
    /// Fresh session state for a chosen level
    pub fn new(level: &'static DifficultyLevel, view: Viewport, seed: u64) -> Self {
        Self {
            seed,
            level,
            view,
            phase: GamePhase::Running,
            score: 0,
            frame_count: 0,
            character: Character::new(view.ground_y()),
            obstacles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn an obstacle at the current level's speed and append it
    pub fn spawn_obstacle(&mut self) {
        let obstacle = Obstacle::spawn(self.view, self.level.obstacle_speed, &mut self.rng);
        self.obstacles.push(obstacle);
    }
}
