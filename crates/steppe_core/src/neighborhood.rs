//! Neighborhood sampling: random single-step movement for the ecosystem
//! variant, full Moore census for the Life variant.

use rand::Rng;

use crate::cell::LifeCell;
use crate::grid::Grid;

/// The 8 offsets of the Moore neighborhood, (0,0) excluded.
pub const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Draws dx and dy independently and uniformly from {-1, 0, 1} and returns
/// the resulting coordinate, or the origin unchanged when the draw lands out
/// of bounds. No retry: a boundary animal simply stays more often. The
/// (0,0) draw is valid, so an animal stands still 1 tick in 9 even in the
/// open field.
pub fn random_move(rng: &mut impl Rng, x: u16, y: u16, width: u16, height: u16) -> (u16, u16) {
    let dx = rng.gen_range(-1i32..=1);
    let dy = rng.gen_range(-1i32..=1);
    let nx = i32::from(x) + dx;
    let ny = i32::from(y) + dy;
    if nx >= 0 && nx < i32::from(width) && ny >= 0 && ny < i32::from(height) {
        (nx as u16, ny as u16)
    } else {
        (x, y)
    }
}

/// Counts Alive cells among the in-bounds Moore neighbors of (x, y).
/// Off-grid offsets are skipped; the board is bounded, not toroidal.
pub fn live_neighbors(grid: &Grid<LifeCell>, x: u16, y: u16) -> u8 {
    let mut count = 0;
    for (dx, dy) in MOORE {
        let nx = i32::from(x) + dx;
        let ny = i32::from(y) + dy;
        if grid.in_bounds(nx, ny) && grid.get(nx as u16, ny as u16).is_alive() {
            count += 1;
        }
    }
    count
}
