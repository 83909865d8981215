/// Rectangular cell container backed by a flat `Vec`, indexed `y * width + x`.
///
/// Coordinates are `u16` like the rest of the world model. Out-of-bounds
/// access is a caller contract violation and panics; internal callers always
/// iterate in bounds or clamp through the neighborhood sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C> {
    width: u16,
    height: u16,
    cells: Vec<C>,
}

impl<C: Clone + Default> Grid<C> {
    /// A grid with every cell set to the default value.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![C::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> usize {
        assert!(
            x < self.width && y < self.height,
            "grid access out of bounds: ({x}, {y}) on {}x{}",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u16, y: u16) -> &C {
        &self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: u16, y: u16, cell: C) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u16) < self.width && (y as u16) < self.height
    }

    /// Row-major coordinate traversal, `(0,0)`, `(1,0)`, .. `(w-1,h-1)`.
    pub fn coords(&self) -> impl Iterator<Item = (u16, u16)> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_default_filled() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid: Grid<u8> = Grid::new(5, 5);
        grid.set(3, 2, 7);
        assert_eq!(*grid.get(3, 2), 7);
        assert_eq!(*grid.get(2, 3), 0);
    }

    #[test]
    fn test_coords_are_row_major() {
        let grid: Grid<u8> = Grid::new(3, 2);
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_get_panics() {
        let grid: Grid<u8> = Grid::new(2, 2);
        grid.get(2, 0);
    }

    #[test]
    fn test_in_bounds() {
        let grid: Grid<u8> = Grid::new(2, 2);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(1, 1));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, 2));
    }
}
