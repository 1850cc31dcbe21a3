//! The scrolling obstacle stream
//!
//! Obstacles enter at the right edge of the viewport, scroll left at a fixed
//! speed, and are recycled once fully off-screen. While a session is running
//! the stream always holds at least `min_obstacles` entries.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{Obstacle, Viewport};
use crate::tuning::Tuning;

/// Obstacles ordered by increasing x
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Last (rightmost) obstacle
    pub fn tail(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    /// Append an obstacle at the tail. Callers keep x increasing.
    pub fn push(&mut self, obstacle: Obstacle) {
        debug_assert!(
            self.tail().is_none_or(|tail| tail.x <= obstacle.x),
            "obstacle stream must stay sorted by x"
        );
        self.obstacles.push(obstacle);
    }

    /// Replace the stream with a fresh course starting at the right edge
    pub fn seed<R: RandomSource + ?Sized>(&mut self, viewport: &Viewport, tuning: &Tuning, rng: &mut R) {
        self.obstacles.clear();
        for i in 0..tuning.min_obstacles {
            let x = viewport.width + i as f32 * tuning.pipe_spacing;
            self.obstacles.push(spawn_obstacle(x, viewport, tuning, rng));
        }
        log::debug!("Seeded {} obstacles from x={}", self.obstacles.len(), viewport.width);
    }

    /// Scroll every obstacle left by one tick's travel and drop the ones whose
    /// trailing edge has reached the left boundary. Returns how many were dropped.
    pub fn scroll(&mut self, tuning: &Tuning) -> usize {
        let before = self.obstacles.len();
        for obstacle in &mut self.obstacles {
            obstacle.x -= tuning.pipe_speed;
        }
        self.obstacles.retain(|o| o.right(tuning) > 0.0);
        before - self.obstacles.len()
    }

    /// Append obstacles past the tail until the stream is back to its minimum
    /// length. Returns how many were spawned.
    pub fn replenish<R: RandomSource + ?Sized>(
        &mut self,
        viewport: &Viewport,
        tuning: &Tuning,
        rng: &mut R,
    ) -> usize {
        let mut spawned = 0;
        while self.obstacles.len() < tuning.min_obstacles {
            let x = match self.tail() {
                Some(tail) => tail.x + tuning.pipe_spacing,
                None => {
                    log::error!("Obstacle stream ran dry while running; re-seeding at the right edge");
                    viewport.width
                }
            };
            let obstacle = spawn_obstacle(x, viewport, tuning, rng);
            log::debug!("Spawned obstacle at x={} gap_top={}", obstacle.x, obstacle.gap_top);
            self.obstacles.push(obstacle);
            spawned += 1;
        }
        spawned
    }
}

impl<'a> IntoIterator for &'a ObstacleStream {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}

impl FromIterator<Obstacle> for ObstacleStream {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        let mut obstacles: Vec<Obstacle> = iter.into_iter().collect();
        obstacles.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { obstacles }
    }
}

/// New obstacle at `x` with a uniformly drawn gap top
pub fn spawn_obstacle<R: RandomSource + ?Sized>(
    x: f32,
    viewport: &Viewport,
    tuning: &Tuning,
    rng: &mut R,
) -> Obstacle {
    let (low, high) = tuning.gap_top_range(viewport.height);
    Obstacle::new(x, low + rng.next() * (high - low))
}
