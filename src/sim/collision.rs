//! Collision and boundary checks
//!
//! Everything is axis-aligned: the character is a box pinned to the viewport's
//! horizontal center, and each obstacle is a column with one gap. Overlap tests
//! are strict, so shapes that only touch along an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Viewport};
use crate::tuning::Tuning;

/// Axis-aligned rectangle in viewport space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Horizontal spans overlap with positive width
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }

    /// Vertical span lies within `[top, bottom]` (edges inclusive)
    #[inline]
    pub fn within_y(&self, top: f32, bottom: f32) -> bool {
        self.min.y >= top && self.max.y <= bottom
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Left the top or bottom of the viewport
    OutOfBounds,
    /// Touched the solid part of an obstacle
    HitObstacle,
}

/// True if a character whose top edge is at `position` would be outside the viewport
pub fn out_of_bounds(position: f32, viewport: &Viewport, tuning: &Tuning) -> bool {
    position < 0.0 || position > viewport.height - tuning.cat_height
}

/// True if the obstacle column overlaps the character horizontally and the
/// character is not fully inside the gap.
pub fn obstacle_collision(character: &Rect, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let column = Rect::from_xywh(obstacle.x, 0.0, tuning.pipe_width, 0.0);
    column.overlaps_x(character) && !character.within_y(obstacle.gap_top, obstacle.gap_bottom(tuning))
}

/// True if the obstacle's trailing edge crosses the midpoint during the coming
/// tick's travel. Each obstacle satisfies this on exactly one tick.
pub fn passes_midpoint(obstacle: &Obstacle, viewport: &Viewport, tuning: &Tuning) -> bool {
    let right = obstacle.right(tuning);
    let mid = viewport.center_x();
    right <= mid && right > mid - tuning.pipe_speed
}
