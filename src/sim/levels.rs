//! Difficulty table
//!
//! Five predefined levels, looked up by id at session start and never
//! mutated. Harder levels move obstacles faster and demand a higher score.

use std::fmt;

use serde::Serialize;

/// One entry of the difficulty table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyLevel {
    pub id: u8,
    /// Score required to win the level
    pub score_goal: u32,
    /// Leftward obstacle speed, pixels per frame
    pub obstacle_speed: f32,
    /// Display label for the shell's finish screen
    pub label: &'static str,
}

/// The fixed difficulty table, exposed read-only
pub const LEVELS: [DifficultyLevel; 5] = [
    DifficultyLevel { id: 1, score_goal: 10, obstacle_speed: 5.0, label: "Easy" },
    DifficultyLevel { id: 2, score_goal: 15, obstacle_speed: 7.0, label: "Normal" },
    DifficultyLevel { id: 3, score_goal: 20, obstacle_speed: 10.0, label: "Medium" },
    DifficultyLevel { id: 4, score_goal: 25, obstacle_speed: 13.0, label: "Hard" },
    DifficultyLevel { id: 5, score_goal: 30, obstacle_speed: 18.0, label: "Extreme" },
];

/// Error returned by [`lookup`] for an id outside the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLevel(pub u8);

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid level id {}, expected 1..=5", self.0)
    }
}

impl std::error::Error for InvalidLevel {}

/// Look up a difficulty level by id
pub fn lookup(id: u8) -> Result<&'static DifficultyLevel, InvalidLevel> {
    LEVELS.iter().find(|level| level.id == id).ok_or(InvalidLevel(id))
}
