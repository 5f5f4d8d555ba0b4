//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One transition per frame, driven by an external scheduler
//! - Seeded RNG only
//! - No self-scheduling, no rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod state;
pub mod tick;

pub use collision::circle_rect_overlap;
pub use levels::{DifficultyLevel, InvalidLevel, LEVELS, lookup};
pub use state::{Character, GamePhase, GameState, Obstacle, Viewport};
pub use tick::tick;
