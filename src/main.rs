//! Flappy Cat entry point
//!
//! Runs a headless session driven by the autopilot and reports the result.
//! Usage: `flappy-cat [settings.json]` (log level via `RUST_LOG`).

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use flappy_cat::sim::autopilot;
use flappy_cat::ui::{Overlay, Strings};
use flappy_cat::{FixedStepDriver, GamePhase, Settings, Simulation};

/// Simulated presentation frame (~60 fps)
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    log::info!("Flappy Cat (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(|path| Settings::load(Path::new(&path)))
        .unwrap_or_default();

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Game initialized with seed: {}", seed);

    let sim = Simulation::new(settings.viewport, settings.tuning.clone(), seed);
    let mut driver = FixedStepDriver::with_interval(sim, settings.tick_interval());

    let mut frames = 0u64;
    loop {
        let sim = driver.simulation();
        if sim.phase() == GamePhase::Over || sim.state().time_ticks >= settings.max_ticks {
            break;
        }
        if autopilot::wants_impulse(sim.state(), sim.tuning()) {
            driver.trigger_impulse();
        }
        for report in driver.advance(FRAME) {
            if report.scored > 0 {
                log::debug!("Scored, total {}", driver.simulation().score());
            }
        }
        frames += 1;
    }

    let sim = driver.simulation();
    let strings = Strings::for_locale(settings.locale);
    println!("{}", strings.game_title);
    match Overlay::for_state(sim.phase(), sim.score(), settings.locale) {
        Overlay::GameOver { score, title } => {
            println!("{}", strings.game_over);
            println!("{}: {}", strings.score_label, score);
            println!("{}: {}", strings.title_label, title);
        }
        _ => {
            println!("{}: {}", strings.score_label, sim.score());
            log::info!("Stopped after {} ticks without a game over", sim.state().time_ticks);
        }
    }
    log::info!("Session ran {} ticks over {} frames", sim.state().time_ticks, frames);
}
