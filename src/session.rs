//! Session controller and the core-to-shell contract
//!
//! A [`Session`] is one playthrough of a chosen level. The shell constructs
//! it with [`Session::start`], forwards every input device's jump gesture to
//! [`Session::jump`], and calls [`Session::tick`] once per display frame,
//! drawing the returned [`FrameSnapshot`]. Once the snapshot carries an
//! [`Outcome`] the session is over and further ticks change nothing.

use serde::Serialize;

use crate::sim::levels::{self, DifficultyLevel, InvalidLevel};
use crate::sim::state::{GamePhase, GameState, Viewport};
use crate::sim::tick::tick;

/// Character geometry for the shell to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleShape {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Obstacle geometry for the shell to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    pub level_id: u8,
    pub level_label: &'static str,
    pub final_score: u32,
    pub won: bool,
}

/// Everything the shell needs to render one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub character: CircleShape,
    /// Spawn order, oldest first
    pub obstacles: Vec<RectShape>,
    /// Present exactly when `phase` is terminal
    pub outcome: Option<Outcome>,
}

/// One playthrough of a chosen level, from start to a terminal outcome
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Start a fresh session. Fails with [`InvalidLevel`] for an id outside
    /// the difficulty table.
    pub fn start(level_id: u8, view: Viewport, seed: u64) -> Result<Self, InvalidLevel> {
        let level = levels::lookup(level_id)?;
        log::info!(
            "session start: level {} ({}), goal {}, seed {}",
            level.id,
            level.label,
            level.score_goal,
            seed
        );
        Ok(Self { state: GameState::new(level, view, seed) })
    }

    /// Request a jump. Applied synchronously; takes effect on the next
    /// frame's integration. No-op while airborne or once the session ended.
    pub fn jump(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.character.jump();
        }
    }

    /// Advance one frame and return the snapshot to render. On a finished
    /// session this returns the terminal snapshot unchanged.
    pub fn tick(&mut self, view: Viewport) -> FrameSnapshot {
        let was_running = self.state.phase == GamePhase::Running;
        tick(&mut self.state, view);

        if was_running && self.state.phase.is_terminal() {
            let won = self.state.phase == GamePhase::Won;
            log::info!(
                "session over: level {} ({}) {} with score {}",
                self.state.level.id,
                self.state.level.label,
                if won { "won" } else { "lost" },
                self.state.score
            );
        }

        self.snapshot()
    }

    /// Difficulty entry this session runs under
    pub fn level(&self) -> &'static DifficultyLevel {
        self.state.level
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    fn snapshot(&self) -> FrameSnapshot {
        let state = &self.state;
        let outcome = state.phase.is_terminal().then(|| Outcome {
            level_id: state.level.id,
            level_label: state.level.label,
            final_score: state.score,
            won: state.phase == GamePhase::Won,
        });

        FrameSnapshot {
            phase: state.phase,
            score: state.score,
            character: CircleShape {
                x: state.character.pos.x,
                y: state.character.pos.y,
                radius: state.character.radius,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| RectShape {
                    x: o.pos.x,
                    y: o.pos.y,
                    width: o.size.x,
                    height: o.size.y,
                })
                .collect(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Obstacle;
    use glam::Vec2;

    const VIEW: Viewport = Viewport { width: 800.0, height: 400.0 };

    #[test]
    fn test_start_rejects_unknown_levels() {
        assert_eq!(Session::start(0, VIEW, 1).unwrap_err(), InvalidLevel(0));
        assert_eq!(Session::start(6, VIEW, 1).unwrap_err(), InvalidLevel(6));
    }

    #[test]
    fn test_start_resets_session_state() {
        let session = Session::start(2, VIEW, 1).unwrap();
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level().label, "Normal");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.character.x, CHARACTER_X);
        assert_eq!(snapshot.character.y, VIEW.ground_y());
        assert_eq!(snapshot.character.radius, CHARACTER_RADIUS);
        assert!(snapshot.obstacles.is_empty());
        assert!(snapshot.outcome.is_none());
    }

    #[test]
    fn test_snapshot_mirrors_obstacles() {
        let mut session = Session::start(1, VIEW, 3).unwrap();
        for _ in 0..SPAWN_INTERVAL_FRAMES {
            session.tick(VIEW);
        }

        let snapshot = session.snapshot();
        assert_eq!(snapshot.obstacles.len(), 1);
        let rect = snapshot.obstacles[0];
        let obstacle = session.state.obstacles[0];
        assert_eq!(rect.x, obstacle.pos.x);
        assert_eq!(rect.y, obstacle.pos.y);
        assert_eq!(rect.width, obstacle.size.x);
        assert_eq!(rect.height, obstacle.size.y);
    }

    #[test]
    fn test_won_outcome_fields() {
        let mut session = Session::start(1, VIEW, 5).unwrap();
        session.state.score = session.level().score_goal - 1;
        session.state.obstacles.push(Obstacle {
            pos: Vec2::new(-100.0, 330.0),
            size: Vec2::new(25.0, 25.0),
            speed: 5.0,
        });

        let snapshot = session.tick(VIEW);
        assert_eq!(snapshot.phase, GamePhase::Won);
        let outcome = snapshot.outcome.unwrap();
        assert_eq!(outcome.level_id, 1);
        assert_eq!(outcome.level_label, "Easy");
        assert_eq!(outcome.final_score, 10);
        assert!(outcome.won);
    }

    #[test]
    fn test_lost_outcome_and_frozen_session() {
        let mut session = Session::start(1, VIEW, 5).unwrap();
        let center = session.state.character.pos;
        session.state.obstacles.push(Obstacle {
            pos: center - Vec2::new(10.0, 10.0),
            size: Vec2::new(20.0, 20.0),
            speed: 0.0,
        });

        let snapshot = session.tick(VIEW);
        assert_eq!(snapshot.phase, GamePhase::Lost);
        assert!(!snapshot.outcome.unwrap().won);

        // Ticks and jumps after the end change nothing.
        let frame_count = session.state.frame_count;
        session.jump();
        let again = session.tick(VIEW);
        assert_eq!(session.state.frame_count, frame_count);
        assert_eq!(again, snapshot);
        assert_eq!(session.state.character.vel_y, 0.0);
    }

    #[test]
    fn test_jump_applies_on_next_integration() {
        let mut session = Session::start(1, VIEW, 5).unwrap();
        session.jump();
        // Second jump in the same frame is a no-op.
        session.jump();
        assert_eq!(session.state.character.vel_y, JUMP_IMPULSE);

        let snapshot = session.tick(VIEW);
        assert_eq!(snapshot.character.y, VIEW.ground_y() + (JUMP_IMPULSE + GRAVITY));
    }

    /// A player who jumps whenever an obstacle gets close clears level 1.
    #[test]
    fn test_reactive_player_wins_level_one() {
        let mut session = Session::start(1, VIEW, 2024).unwrap();
        let speed = session.level().obstacle_speed;

        for _ in 0..20_000 {
            let frame = session.tick(VIEW);
            if let Some(outcome) = frame.outcome {
                assert!(outcome.won, "reactive player should not crash");
                assert_eq!(outcome.final_score, session.level().score_goal);
                return;
            }

            let nearest_gap = frame
                .obstacles
                .iter()
                .filter(|o| o.x + o.width >= frame.character.x)
                .map(|o| o.x - frame.character.x)
                .fold(f32::INFINITY, f32::min);
            if nearest_gap < speed * 12.0 {
                session.jump();
            }
        }
        panic!("session did not finish");
    }
}
