//! Conway's Game of Life (B3/S23) on a bounded, non-wrapping board.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::cell::LifeCell;
use crate::config::LifeConfig;
use crate::engine::Ruleset;
use crate::grid::Grid;
use crate::neighborhood;

pub struct LifeRule {
    pub config: LifeConfig,
}

impl LifeRule {
    pub fn new(config: LifeConfig) -> Self {
        Self { config }
    }
}

impl Ruleset for LifeRule {
    type Cell = LifeCell;

    /// Random soup: each cell starts Alive with `soup_density` probability.
    fn seed(&self, grid: &mut Grid<LifeCell>, rng: &mut ChaCha8Rng) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if rng.gen_bool(self.config.soup_density) {
                    grid.set(x, y, LifeCell::Alive);
                }
            }
        }
        debug!(density = self.config.soup_density, "soup seeded");
    }

    fn apply(
        &self,
        current: &Grid<LifeCell>,
        x: u16,
        y: u16,
        next: &mut Grid<LifeCell>,
        _rng: &mut ChaCha8Rng,
    ) {
        let n = neighborhood::live_neighbors(current, x, y);
        let cell = match (current.get(x, y).is_alive(), n) {
            (true, 2) | (true, 3) => LifeCell::Alive,
            (false, 3) => LifeCell::Alive,
            _ => LifeCell::Empty,
        };
        next.set(x, y, cell);
    }

    fn summary(&self, grid: &Grid<LifeCell>) -> String {
        let alive = grid.iter().filter(|c| c.is_alive()).count();
        format!("{alive} alive")
    }
}
