//! The simulation engine: one owned game session
//!
//! Bundles the game state with its tuning and random source and exposes the
//! four entry points the host drives: `trigger_impulse`, `tick`, `reset` and
//! `on_viewport_resize`. Everything else is read-only.

use super::rng::{RandomSource, SeededRandom};
use super::state::{Character, GamePhase, GameState, Obstacle, Viewport};
use super::tick::{TickReport, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Simulation<R = SeededRandom> {
    state: GameState,
    tuning: Tuning,
    rng: R,
}

impl Simulation<SeededRandom> {
    /// New session with a seeded PCG random source
    pub fn new(viewport: Viewport, tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(viewport, tuning, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn with_rng(viewport: Viewport, tuning: Tuning, rng: R) -> Self {
        Self::from_state(GameState::new(viewport), tuning, rng)
    }

    /// Resume from an existing state (restored snapshot, test fixture)
    pub fn from_state(state: GameState, tuning: Tuning, rng: R) -> Self {
        Self { state, tuning, rng }
    }

    /// Player input: start the session if needed, then kick upward.
    /// Ignored once the session is over.
    pub fn trigger_impulse(&mut self) {
        let state = &mut self.state;
        match state.phase {
            GamePhase::Over => return,
            GamePhase::NotStarted => {
                state.phase = GamePhase::Running;
                state.obstacles.seed(&state.viewport, &self.tuning, &mut self.rng);
                log::info!(
                    "Game started in {}x{} viewport",
                    state.viewport.width,
                    state.viewport.height
                );
            }
            GamePhase::Running => {}
        }
        state.character.velocity = self.tuning.jump_strength;
        state.character.rotation = self.tuning.impulse_rotation;
    }

    /// Advance one fixed step
    pub fn tick(&mut self) -> TickReport {
        tick(&mut self.state, &self.tuning, &mut self.rng)
    }

    /// Back to a fresh, not-yet-started session in the current viewport
    pub fn reset(&mut self) {
        let previous = self.state.phase;
        self.state = GameState::new(self.state.viewport);
        if previous != GamePhase::NotStarted {
            log::info!("Game reset");
        }
    }

    /// Existing obstacles and the character are left where they are; only
    /// new spawns and boundary checks see the new size.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.state.viewport = Viewport::new(width, height);
        log::debug!("Viewport resized to {}x{}", width, height);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    pub fn character(&self) -> Character {
        self.state.character
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.state.obstacles.as_slice()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }
}
