//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. This module stays pure:
//! - Fixed timestep only
//! - Randomness only through an injected `RandomSource`
//! - No rendering, input or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod rng;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{DeathCause, Rect};
pub use engine::Simulation;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use state::{Character, GamePhase, GameState, Obstacle, Viewport};
pub use stream::ObstacleStream;
pub use tick::{TickReport, tick};
