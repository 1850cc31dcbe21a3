//! Flappy Cat - a single-screen gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (physics, obstacle stream, scoring, collisions)
//! - `driver`: Host-owned fixed-interval tick scheduler
//! - `ui`: Presentation view model (localized text, score titles, overlays)
//! - `settings`: Runtime configuration loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use driver::FixedStepDriver;
pub use settings::Settings;
pub use sim::{GamePhase, GameState, Simulation};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval (50 Hz)
    pub const TICK_INTERVAL_MS: u64 = 20;
    /// Maximum ticks run per host frame; anything later is coalesced away
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by an impulse (negative = upward), units/tick
    pub const JUMP_STRENGTH: f32 = -10.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_SPEED: f32 = 3.0;
    pub const PIPE_SPACING: f32 = 300.0;
    /// Minimum height of the solid part above and below a gap
    pub const MIN_PIPE_HEIGHT: f32 = 50.0;
    /// Obstacles kept alive while running
    pub const MIN_OBSTACLES: usize = 3;

    /// Character bounding box
    pub const CAT_WIDTH: f32 = 40.0;
    pub const CAT_HEIGHT: f32 = 30.0;

    /// Cosmetic rotation (degrees)
    pub const ROTATION_STEP: f32 = 4.0;
    pub const IMPULSE_ROTATION: f32 = -45.0;
    pub const MAX_ROTATION: f32 = 90.0;
}
