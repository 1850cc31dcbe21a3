//! Data-driven game balance
//!
//! Every physics and obstacle constant the simulation reads lives here, so a
//! settings file can rebalance the game without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_strength: f32,

    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spacing: f32,
    pub min_pipe_height: f32,
    pub min_obstacles: usize,

    pub cat_width: f32,
    pub cat_height: f32,

    /// Degrees added per tick while falling
    pub rotation_step: f32,
    /// Rotation applied by an impulse
    pub impulse_rotation: f32,
    /// Rotation cap
    pub max_rotation: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_spacing: PIPE_SPACING,
            min_pipe_height: MIN_PIPE_HEIGHT,
            min_obstacles: MIN_OBSTACLES,

            cat_width: CAT_WIDTH,
            cat_height: CAT_HEIGHT,

            rotation_step: ROTATION_STEP,
            impulse_rotation: IMPULSE_ROTATION,
            max_rotation: MAX_ROTATION,
        }
    }
}

impl Tuning {
    /// Range `[low, high)` a gap top is drawn from for the given viewport height.
    ///
    /// Collapses to an empty range at `min_pipe_height` when the viewport is too
    /// short to fit the gap plus both minimum pipe stubs.
    pub fn gap_top_range(&self, viewport_height: f32) -> (f32, f32) {
        let low = self.min_pipe_height;
        let high = viewport_height - self.pipe_gap - self.min_pipe_height;
        (low, high.max(low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.6);
        assert_eq!(t.jump_strength, -10.0);
        assert_eq!(t.pipe_spacing, 300.0);
        assert_eq!(t.min_obstacles, 3);
    }

    #[test]
    fn test_gap_top_range() {
        let t = Tuning::default();
        assert_eq!(t.gap_top_range(600.0), (50.0, 350.0));
        // Too short for a gap: empty range pinned at the minimum
        assert_eq!(t.gap_top_range(250.0), (50.0, 50.0));
    }
}
