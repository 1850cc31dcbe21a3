use flappy_cat::Tuning;
use flappy_cat::sim::{
    GamePhase, GameState, Obstacle, ScriptedRandom, SeededRandom, Simulation, Viewport,
};
use proptest::prelude::*;

fn running_sim(state: GameState) -> Simulation<ScriptedRandom> {
    Simulation::from_state(state, Tuning::default(), ScriptedRandom::constant(0.5))
}

fn running_state(viewport: Viewport, obstacles: &[Obstacle]) -> GameState {
    let mut state = GameState::new(viewport);
    state.phase = GamePhase::Running;
    state.obstacles = obstacles.iter().copied().collect();
    state
}

/// Columns parked off to the right, never touching the character
fn far_course(viewport: &Viewport) -> Vec<Obstacle> {
    (0..3)
        .map(|i| Obstacle::new(viewport.width + 500.0 + i as f32 * 300.0, 100.0))
        .collect()
}

#[test]
fn first_impulse_scenario() {
    let mut sim = Simulation::new(Viewport::new(400.0, 600.0), Tuning::default(), 42);
    sim.trigger_impulse();

    assert_eq!(sim.phase(), GamePhase::Running);
    assert_eq!(sim.score(), 0);
    assert_eq!(sim.character().velocity, flappy_cat::consts::JUMP_STRENGTH);
    let xs: Vec<f32> = sim.obstacles().iter().map(|o| o.x).collect();
    assert_eq!(xs, vec![400.0, 700.0, 1000.0]);
}

#[test]
fn same_seed_same_course() {
    let viewport = Viewport::new(400.0, 600.0);
    let mut a = Simulation::with_rng(viewport, Tuning::default(), SeededRandom::new(99));
    let mut b = Simulation::with_rng(viewport, Tuning::default(), SeededRandom::new(99));
    a.trigger_impulse();
    b.trigger_impulse();
    for _ in 0..40 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.state(), b.state());
}

proptest! {
    #[test]
    fn velocity_gains_gravity_each_tick(position in 100.0f32..400.0, velocity in -10.0f32..10.0) {
        let viewport = Viewport::new(400.0, 600.0);
        let mut state = running_state(viewport, &far_course(&viewport));
        state.character.position = position;
        state.character.velocity = velocity;
        let mut sim = running_sim(state);

        sim.tick();
        prop_assert_eq!(sim.character().velocity, velocity + 0.6);
    }

    #[test]
    fn floor_contact_with_downward_velocity_dies(velocity in 0.01f32..50.0) {
        let viewport = Viewport::new(400.0, 600.0);
        let mut state = running_state(viewport, &far_course(&viewport));
        state.character.position = 570.0;
        state.character.velocity = velocity;
        let mut sim = running_sim(state);

        sim.tick();
        prop_assert_eq!(sim.phase(), GamePhase::Over);
        prop_assert_eq!(sim.character().position, 570.0);
    }

    #[test]
    fn stream_stays_full_and_score_never_drops(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(any::<bool>(), 1..400),
    ) {
        let mut sim = Simulation::new(Viewport::new(400.0, 600.0), Tuning::default(), seed);
        sim.trigger_impulse();

        let mut last_score = 0;
        for flap in inputs {
            if flap {
                sim.trigger_impulse();
            }
            let was_running = sim.phase() == GamePhase::Running;
            let report = sim.tick();
            if was_running {
                prop_assert!(sim.obstacles().len() >= 3);
            }
            prop_assert!(report.scored <= 1);
            prop_assert!(sim.score() >= last_score);
            prop_assert!(sim.character().rotation <= 90.0);
            prop_assert!(sim.obstacles().windows(2).all(|w| w[0].x < w[1].x));
            last_score = sim.score();
        }
    }

    #[test]
    fn trailing_edge_on_midpoint_scores_once(width in 200u32..2000) {
        let viewport = Viewport::new(width as f32, 600.0);
        let x = viewport.center_x() - 80.0;
        let mut state = running_state(viewport, &[
            Obstacle::new(x, 250.0),
            Obstacle::new(x + 300.0, 250.0),
            Obstacle::new(x + 600.0, 250.0),
        ]);
        state.character.position = 300.0;
        let mut sim = running_sim(state);

        let report = sim.tick();
        prop_assert_eq!(report.scored, 1);
        prop_assert_eq!(sim.score(), 1);
        prop_assert_eq!(sim.phase(), GamePhase::Running);
    }

    #[test]
    fn inside_gap_is_safe(gap_top in 50u32..350, offset in 0u32..=170) {
        let viewport = Viewport::new(400.0, 600.0);
        let gap_top = gap_top as f32;
        let mut state = running_state(viewport, &[
            Obstacle::new(160.0, gap_top),
            Obstacle::new(460.0, gap_top),
            Obstacle::new(760.0, gap_top),
        ]);
        state.character.position = gap_top + offset as f32;
        let mut sim = running_sim(state);

        sim.tick();
        prop_assert_eq!(sim.phase(), GamePhase::Running);
    }

    #[test]
    fn above_gap_collides(gap_top in 51u32..350) {
        let viewport = Viewport::new(400.0, 600.0);
        let gap_top = gap_top as f32;
        let mut state = running_state(viewport, &[
            Obstacle::new(160.0, gap_top),
            Obstacle::new(460.0, gap_top),
            Obstacle::new(760.0, gap_top),
        ]);
        state.character.position = gap_top - 1.0;
        let mut sim = running_sim(state);

        sim.tick();
        prop_assert_eq!(sim.phase(), GamePhase::Over);
    }

    #[test]
    fn reset_is_idempotent(seed in any::<u64>(), ticks in 0usize..200) {
        let mut sim = Simulation::new(Viewport::new(400.0, 600.0), Tuning::default(), seed);
        sim.trigger_impulse();
        for _ in 0..ticks {
            sim.tick();
        }

        sim.reset();
        let once = sim.state().clone();
        sim.reset();
        prop_assert_eq!(sim.state(), &once);
        prop_assert_eq!(sim.phase(), GamePhase::NotStarted);
    }
}
