//! Collision detection
//!
//! Circle-vs-axis-aligned-rectangle overlap between the character and an
//! obstacle. This runs once per obstacle per frame, so the cheap separating
//! tests come before the corner distance check.

use glam::Vec2;

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// `rect_pos` is the rectangle's top-left corner. Boundary contact counts
/// as overlap.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let half = rect_size / 2.0;
    let dist = (center - (rect_pos + half)).abs();

    // Trivial separation on either axis.
    if dist.x > half.x + radius || dist.y > half.y + radius {
        return false;
    }

    // Center projects inside the rectangle's horizontal or vertical band.
    if dist.x <= half.x || dist.y <= half.y {
        return true;
    }

    // Corner case: closest rectangle corner within the radius.
    let corner = dist - half;
    corner.length_squared() <= radius * radius
}
