//! Host-side fixed-interval tick scheduler
//!
//! The host feeds wall-clock time into [`FixedStepDriver::advance`] once per
//! frame; the driver turns it into whole simulation ticks. A tick timer exists
//! only while the session is running. It is dropped as soon as the phase
//! leaves `Running` (and with the driver itself), taking any banked time with
//! it, so no tick can fire for a finished session.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};
use crate::sim::{GamePhase, RandomSource, SeededRandom, Simulation, TickReport};

/// Repeating timer state, alive only while running
#[derive(Debug)]
struct TickTimer {
    accumulator: Duration,
    fired: u64,
}

impl TickTimer {
    fn start() -> Self {
        log::debug!("Tick timer started");
        Self {
            accumulator: Duration::ZERO,
            fired: 0,
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        log::debug!("Tick timer stopped after {} ticks", self.fired);
    }
}

#[derive(Debug)]
pub struct FixedStepDriver<R = SeededRandom> {
    sim: Simulation<R>,
    interval: Duration,
    timer: Option<TickTimer>,
}

impl<R: RandomSource> FixedStepDriver<R> {
    pub fn new(sim: Simulation<R>) -> Self {
        Self::with_interval(sim, Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Zero intervals are bumped to one millisecond
    pub fn with_interval(sim: Simulation<R>, interval: Duration) -> Self {
        let mut driver = Self {
            sim,
            interval: interval.max(Duration::from_millis(1)),
            timer: None,
        };
        driver.sync_timer();
        driver
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    /// True while the repeating timer is armed
    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    pub fn trigger_impulse(&mut self) {
        self.sim.trigger_impulse();
        self.sync_timer();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.sync_timer();
    }

    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.sim.on_viewport_resize(width, height);
    }

    /// Feed elapsed host time and run every whole tick it covers.
    ///
    /// At most `MAX_SUBSTEPS` ticks run per call; a late frame is clamped
    /// rather than replayed in full. Returns the reports of the ticks that ran.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TickReport> {
        let mut reports = Vec::new();
        let max_banked = self.interval * MAX_SUBSTEPS;

        while let Some(timer) = self.timer.as_mut() {
            if reports.is_empty() {
                timer.accumulator = (timer.accumulator + elapsed).min(max_banked);
            }
            if timer.accumulator < self.interval || reports.len() as u32 >= MAX_SUBSTEPS {
                break;
            }
            timer.accumulator -= self.interval;
            timer.fired += 1;

            reports.push(self.sim.tick());
            self.sync_timer();
        }

        reports
    }

    /// Arm the timer on entering `Running`, drop it on leaving
    fn sync_timer(&mut self) {
        let running = self.sim.phase() == GamePhase::Running;
        match (running, self.timer.is_some()) {
            (true, false) => self.timer = Some(TickTimer::start()),
            (false, true) => self.timer = None,
            _ => {}
        }
    }
}
