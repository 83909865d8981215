//! Predator/prey variant: grass feeds sheep, sheep feed wolves, corpses
//! mineralize and regrow into grass one tick later.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::cell::{Animal, EcoCell};
use crate::config::EcosystemConfig;
use crate::engine::Ruleset;
use crate::grid::Grid;
use crate::neighborhood;

pub struct EcosystemRule {
    pub config: EcosystemConfig,
    pub initial_sheep: usize,
    pub initial_wolves: usize,
}

impl EcosystemRule {
    pub fn new(config: EcosystemConfig, initial_sheep: usize, initial_wolves: usize) -> Self {
        Self {
            config,
            initial_sheep,
            initial_wolves,
        }
    }

    fn step_sheep(
        &self,
        mut sheep: Animal,
        current: &Grid<EcoCell>,
        x: u16,
        y: u16,
        next: &mut Grid<EcoCell>,
        rng: &mut ChaCha8Rng,
    ) {
        sheep.age += 1;
        sheep.hunger += 1;
        if sheep.age > self.config.sheep_max_age || sheep.hunger > self.config.sheep_max_hunger {
            next.set(x, y, EcoCell::Mineral);
            return;
        }
        let (nx, ny) = neighborhood::random_move(rng, x, y, current.width(), current.height());
        match current.get(nx, ny) {
            EcoCell::Grass => {
                sheep.hunger = 0;
                next.set(nx, ny, EcoCell::Sheep(sheep));
                next.set(x, y, EcoCell::Empty);
            }
            EcoCell::Empty => {
                next.set(nx, ny, EcoCell::Sheep(sheep));
                next.set(x, y, EcoCell::Empty);
            }
            // Occupied target, or the (0,0) draw landing on itself: stay put.
            _ => next.set(x, y, EcoCell::Sheep(sheep)),
        }
    }

    fn step_wolf(
        &self,
        mut wolf: Animal,
        current: &Grid<EcoCell>,
        x: u16,
        y: u16,
        next: &mut Grid<EcoCell>,
        rng: &mut ChaCha8Rng,
    ) {
        wolf.age += 1;
        wolf.hunger += 1;
        if wolf.age > self.config.wolf_max_age || wolf.hunger > self.config.wolf_max_hunger {
            next.set(x, y, EcoCell::Mineral);
            return;
        }
        let (nx, ny) = neighborhood::random_move(rng, x, y, current.width(), current.height());
        match current.get(nx, ny) {
            EcoCell::Sheep(_) => {
                wolf.hunger = 0;
                next.set(nx, ny, EcoCell::Wolf(wolf));
                next.set(x, y, EcoCell::Empty);
            }
            EcoCell::Empty => {
                next.set(nx, ny, EcoCell::Wolf(wolf));
                next.set(x, y, EcoCell::Empty);
            }
            _ => next.set(x, y, EcoCell::Wolf(wolf)),
        }
    }
}

impl Ruleset for EcosystemRule {
    type Cell = EcoCell;

    /// Grass sprinkled cell by cell, then animals dropped on a shuffled
    /// deck of coordinates: sheep take the first positions, wolves the next.
    fn seed(&self, grid: &mut Grid<EcoCell>, rng: &mut ChaCha8Rng) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if rng.gen_bool(self.config.grass_density) {
                    grid.set(x, y, EcoCell::Grass);
                }
            }
        }

        let mut positions: Vec<(u16, u16)> = grid.coords().collect();
        positions.shuffle(rng);
        for &(x, y) in positions.iter().take(self.initial_sheep) {
            grid.set(x, y, EcoCell::Sheep(Animal::spawn(rng)));
        }
        for &(x, y) in positions
            .iter()
            .skip(self.initial_sheep)
            .take(self.initial_wolves)
        {
            grid.set(x, y, EcoCell::Wolf(Animal::spawn(rng)));
        }
        debug!(
            sheep = self.initial_sheep,
            wolves = self.initial_wolves,
            "initial population placed"
        );
    }

    /// Every cell writes its successor into the shared next grid; colliding
    /// writes resolve last-writer-wins in row-major order.
    fn apply(
        &self,
        current: &Grid<EcoCell>,
        x: u16,
        y: u16,
        next: &mut Grid<EcoCell>,
        rng: &mut ChaCha8Rng,
    ) {
        match *current.get(x, y) {
            EcoCell::Sheep(sheep) => self.step_sheep(sheep, current, x, y, next, rng),
            EcoCell::Wolf(wolf) => self.step_wolf(wolf, current, x, y, next, rng),
            EcoCell::Grass => next.set(x, y, EcoCell::Grass),
            // Regrowth: one generation as mineral, then grass again.
            EcoCell::Mineral => next.set(x, y, EcoCell::Grass),
            // The next grid starts all-Empty; the write still happens so the
            // coordinate takes part in last-writer-wins like any other.
            EcoCell::Empty => next.set(x, y, EcoCell::Empty),
        }
    }

    fn extinct(&self, grid: &Grid<EcoCell>) -> bool {
        !is_alive(grid)
    }

    fn summary(&self, grid: &Grid<EcoCell>) -> String {
        let (sheep, wolves, grass) = census(grid);
        format!("{sheep} sheep | {wolves} wolves | {grass} grass")
    }
}

/// True iff at least one sheep or wolf remains anywhere on the grid.
pub fn is_alive(grid: &Grid<EcoCell>) -> bool {
    grid.iter().any(EcoCell::is_animal)
}

/// (sheep, wolves, grass) counts over the whole grid.
pub fn census(grid: &Grid<EcoCell>) -> (usize, usize, usize) {
    let mut sheep = 0;
    let mut wolves = 0;
    let mut grass = 0;
    for cell in grid.iter() {
        match cell {
            EcoCell::Sheep(_) => sheep += 1,
            EcoCell::Wolf(_) => wolves += 1,
            EcoCell::Grass => grass += 1,
            _ => {}
        }
    }
    (sheep, wolves, grass)
}
