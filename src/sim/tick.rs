//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one step.

use serde::{Deserialize, Serialize};

use super::collision::{DeathCause, obstacle_collision, out_of_bounds, passes_midpoint};
use super::rng::RandomSource;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Points gained this tick
    pub scored: u32,
    /// Set when the session ended on this tick
    pub death: Option<DeathCause>,
}

/// Advance the game state by one fixed timestep. No-op unless running.
///
/// Scoring and obstacle collisions are judged against the world as it stood at
/// the start of the tick (character and obstacles before this tick moved them),
/// so they are evaluated first and the integration steps follow.
pub fn tick<R: RandomSource + ?Sized>(state: &mut GameState, tuning: &Tuning, rng: &mut R) -> TickReport {
    if state.phase != GamePhase::Running {
        return TickReport::default();
    }

    state.time_ticks += 1;
    let viewport = state.viewport;

    let scored = state
        .obstacles
        .iter()
        .filter(|o| passes_midpoint(o, &viewport, tuning))
        .count() as u32;

    let bounds = state.character.bounds(&viewport, tuning);
    let hit = state
        .obstacles
        .iter()
        .any(|o| obstacle_collision(&bounds, o, tuning));

    // Integrate position; freeze in place on leaving the viewport
    let character = &mut state.character;
    let next = character.position + character.velocity;
    let escaped = out_of_bounds(next, &viewport, tuning);
    if !escaped {
        character.position = next;
    }

    character.velocity += tuning.gravity;
    character.rotation = (character.rotation + tuning.rotation_step).min(tuning.max_rotation);

    state.obstacles.scroll(tuning);
    state.obstacles.replenish(&viewport, tuning, rng);

    state.score += u64::from(scored);

    let death = if escaped {
        Some(DeathCause::OutOfBounds)
    } else if hit {
        Some(DeathCause::HitObstacle)
    } else {
        None
    };
    if let Some(cause) = death {
        state.phase = GamePhase::Over;
        log::info!(
            "Game over ({:?}) after {} ticks, score {}",
            cause,
            state.time_ticks,
            state.score
        );
    }

    TickReport { scored, death }
}
