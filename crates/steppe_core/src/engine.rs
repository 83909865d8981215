use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cell::CellView;
use crate::grid::Grid;

/// One rule variant. `apply` reads only the pre-step grid and writes the
/// successor state(s) into the next grid; movement rules may write two
/// coordinates, census rules exactly one. Writes land in row-major call
/// order, so a later write to the same coordinate wins.
pub trait Ruleset {
    type Cell: CellView + Clone + Default;

    /// Populates the initial grid.
    fn seed(&self, grid: &mut Grid<Self::Cell>, rng: &mut ChaCha8Rng);

    fn apply(
        &self,
        current: &Grid<Self::Cell>,
        x: u16,
        y: u16,
        next: &mut Grid<Self::Cell>,
        rng: &mut ChaCha8Rng,
    );

    /// True when the run loop should stop early. Only the ecosystem variant
    /// ever reports extinction.
    fn extinct(&self, _grid: &Grid<Self::Cell>) -> bool {
        false
    }

    /// One-line population summary for the frame title.
    fn summary(&self, _grid: &Grid<Self::Cell>) -> String {
        String::new()
    }
}

/// The simulation instance: dimensions, current grid, rule and an owned
/// seeded RNG. A fixed seed reproduces the full grid sequence bit for bit.
pub struct Automaton<R: Ruleset> {
    pub width: u16,
    pub height: u16,
    pub tick: u64,
    pub grid: Grid<R::Cell>,
    pub rule: R,
    pub rng: ChaCha8Rng,
}

impl<R: Ruleset> Automaton<R> {
    pub fn new(width: u16, height: u16, rule: R, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut grid = Grid::new(width, height);
        rule.seed(&mut grid, &mut rng);
        Self {
            width,
            height,
            tick: 0,
            grid,
            rule,
            rng,
        }
    }

    /// Advances one generation: builds a default-filled next grid, applies
    /// the rule at every coordinate in row-major order against the pre-step
    /// grid, then swaps the buffers. A rule never observes a neighbor's
    /// already-updated state within the same tick.
    pub fn step(&mut self) {
        let mut next = Grid::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                self.rule.apply(&self.grid, x, y, &mut next, &mut self.rng);
            }
        }
        self.grid = next;
        self.tick += 1;
    }

    pub fn is_extinct(&self) -> bool {
        self.rule.extinct(&self.grid)
    }

    pub fn summary(&self) -> String {
        self.rule.summary(&self.grid)
    }
}
