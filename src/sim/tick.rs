//! Per-frame simulation step
//!
//! One call advances a running session by exactly one frame. The core never
//! schedules itself: the shell calls this once per display refresh and stops
//! once the phase turns terminal.

use super::collision::circle_rect_overlap;
use super::state::{GamePhase, GameState, Viewport};
use crate::consts::SPAWN_INTERVAL_FRAMES;

/// Advance the session by one frame.
///
/// Terminal phases are frozen: the call is a no-op once the session is won
/// or lost. The viewport is whatever the shell measured for this frame; the
/// ground line and spawn edge follow it.
pub fn tick(state: &mut GameState, view: Viewport) {
    if state.phase.is_terminal() {
        return;
    }

    state.view = view;
    state.frame_count += 1;

    state.character.integrate(view.ground_y());

    if state.frame_count % SPAWN_INTERVAL_FRAMES == 0 {
        state.spawn_obstacle();
    }

    for obstacle in &mut state.obstacles {
        obstacle.advance();
    }

    let character = state.character;
    let hit = state
        .obstacles
        .iter()
        .any(|o| circle_rect_overlap(character.pos, character.radius, o.pos, o.size));
    if hit {
        state.phase = GamePhase::Lost;
        return;
    }

    // Each obstacle that cleared the left edge scores one point.
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_expired());
    state.score += (before - state.obstacles.len()) as u32;

    if state.score >= state.level.score_goal {
        state.phase = GamePhase::Won;
    }
}
