//! Idle/demo player
//!
//! Decides from a state snapshot whether to trigger an impulse this tick.
//! It aims for the lower part of the next gap and flaps when the character is
//! about to sink below that line.

use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Distance kept between the character's bottom and the gap's bottom edge
const AIM_MARGIN: f32 = 24.0;

pub fn wants_impulse(state: &GameState, tuning: &Tuning) -> bool {
    match state.phase {
        GamePhase::NotStarted => true,
        GamePhase::Over => false,
        GamePhase::Running => {
            let character = &state.character;
            let footprint_left = state.viewport.center_x() - tuning.cat_width / 2.0;

            let aim = state
                .obstacles
                .iter()
                .find(|o| o.right(tuning) > footprint_left)
                .map(|o| o.gap_bottom(tuning) - AIM_MARGIN)
                .unwrap_or(state.viewport.height / 2.0 + tuning.cat_height);

            let predicted_bottom = character.bottom(tuning) + character.velocity + tuning.gravity;
            character.velocity >= 0.0 && predicted_bottom > aim
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, Viewport};

    fn running(position: f32, velocity: f32, obstacles: &[Obstacle]) -> GameState {
        let mut state = GameState::new(Viewport::new(400.0, 600.0));
        state.phase = GamePhase::Running;
        state.character.position = position;
        state.character.velocity = velocity;
        state.obstacles = obstacles.iter().copied().collect();
        state
    }

    #[test]
    fn test_starts_and_stops() {
        let tuning = Tuning::default();
        let mut state = GameState::new(Viewport::new(400.0, 600.0));
        assert!(wants_impulse(&state, &tuning));
        state.phase = GamePhase::Over;
        assert!(!wants_impulse(&state, &tuning));
    }

    #[test]
    fn test_flaps_when_sinking_below_gap() {
        let tuning = Tuning::default();
        let course = [Obstacle::new(300.0, 100.0)];
        // Gap bottom 300, aim 276; bottom 280 and falling
        assert!(wants_impulse(&running(250.0, 2.0, &course), &tuning));
        // Well above the aim line
        assert!(!wants_impulse(&running(150.0, 2.0, &course), &tuning));
        // Still rising: let the impulse play out
        assert!(!wants_impulse(&running(250.0, -5.0, &course), &tuning));
    }

    #[test]
    fn test_ignores_passed_obstacles() {
        let tuning = Tuning::default();
        // First column is behind the footprint, the next gap is much lower
        let course = [Obstacle::new(50.0, 50.0), Obstacle::new(350.0, 300.0)];
        assert!(!wants_impulse(&running(300.0, 1.0, &course), &tuning));
    }
}
