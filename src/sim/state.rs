//! Game state and core simulation types
//!
//! Everything the presentation layer reads each frame lives here.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::stream::ObstacleStream;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first impulse
    #[default]
    NotStarted,
    /// Active gameplay, ticks advance the world
    Running,
    /// Session ended; only `reset` leaves this phase
    Over,
}

/// Playable area, in length units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal midpoint; the character is fixed here
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(400.0, 600.0)
    }
}

/// The player character. Only its vertical motion is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Top edge, measured down from the top of the viewport
    pub position: f32,
    /// Units per tick (negative = upward)
    pub velocity: f32,
    /// Cosmetic tilt in degrees, within [-45, 90]
    pub rotation: f32,
}

impl Character {
    /// Resting state at the vertical center of the viewport
    pub fn at_rest(viewport: &Viewport) -> Self {
        Self {
            position: viewport.height / 2.0,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Bottom edge for the given character height
    #[inline]
    pub fn bottom(&self, tuning: &Tuning) -> f32 {
        self.position + tuning.cat_height
    }

    /// Bounding box, horizontally centered in the viewport
    pub fn bounds(&self, viewport: &Viewport, tuning: &Tuning) -> Rect {
        Rect::from_xywh(
            viewport.center_x() - tuning.cat_width / 2.0,
            self.position,
            tuning.cat_width,
            tuning.cat_height,
        )
    }
}

/// A vertical barrier with a single passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the solid part above the gap
    pub gap_top: f32,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self { x, gap_top }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.pipe_gap
    }

    /// The two solid rectangles: above the gap, then below it
    pub fn solid_rects(&self, viewport: &Viewport, tuning: &Tuning) -> [Rect; 2] {
        let bottom = self.gap_bottom(tuning);
        [
            Rect::from_xywh(self.x, 0.0, tuning.pipe_width, self.gap_top),
            Rect::from_xywh(
                self.x,
                bottom,
                tuning.pipe_width,
                (viewport.height - bottom).max(0.0),
            ),
        ]
    }
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub character: Character,
    /// Obstacles sorted by increasing x
    pub obstacles: ObstacleStream,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks simulated this session
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh, not-yet-started session for the given viewport
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            character: Character::at_rest(&viewport),
            obstacles: ObstacleStream::new(),
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
