//! Bunny Dash - a single-screen endless-runner core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collision, game state)
//! - `session`: Session controller and the core-to-shell contract
//!
//! The crate renders nothing. An external shell picks a level, calls
//! [`Session::start`], forwards input to [`Session::jump`], drives
//! [`Session::tick`] once per display frame and draws the snapshot it
//! returns. The shell stops scheduling frames once the snapshot carries a
//! terminal [`Outcome`].

pub mod session;
pub mod sim;

pub use session::{FrameSnapshot, Outcome, Session};
pub use sim::levels::{DifficultyLevel, InvalidLevel, LEVELS};
pub use sim::state::Viewport;

/// Game configuration constants
pub mod consts {
    /// Horizontal position of the character (fixed for a whole session)
    pub const CHARACTER_X: f32 = 50.0;
    /// Character hitbox radius
    pub const CHARACTER_RADIUS: f32 = 20.0;

    /// Downward acceleration, pixels per frame squared
    pub const GRAVITY: f32 = 0.6;
    /// Jump impulse, pixels per frame (negative = upward)
    pub const JUMP_IMPULSE: f32 = -12.0;

    /// The character's rest line sits this far above the bottom edge
    pub const GROUND_CLEARANCE: f32 = 60.0;
    /// Height of the ground strip obstacles rest on
    pub const GROUND_STRIP_HEIGHT: f32 = 20.0;

    /// Frames between obstacle spawns
    pub const SPAWN_INTERVAL_FRAMES: u64 = 90;

    /// Obstacle size ranges (uniform, half-open)
    pub const OBSTACLE_WIDTH_MIN: f32 = 20.0;
    pub const OBSTACLE_WIDTH_MAX: f32 = 40.0;
    pub const OBSTACLE_HEIGHT_MIN: f32 = 20.0;
    pub const OBSTACLE_HEIGHT_MAX: f32 = 50.0;
}
