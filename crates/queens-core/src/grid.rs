use std::ops::{Index, IndexMut};

use crate::Position;

/// A square, row-major board container indexed by [`Position`].
///
/// The grid owns `size * size` cells. Indexing with an out-of-range position
/// is a caller contract violation and panics; callers are expected to stay
/// within the board they were handed rather than probe for bounds.
///
/// # Example
///
/// ```
/// use queens_core::{Grid, Position};
///
/// let mut grid = Grid::new(3, 0u32);
/// grid[Position::new(1, 2)] = 7;
/// assert_eq!(grid[Position::new(1, 2)], 7);
/// assert_eq!(grid[Position::new(0, 0)], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: u8,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    #[must_use]
    pub fn new(size: u8, fill: T) -> Self
    where
        T: Clone,
    {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            cells: vec![fill; len],
        }
    }

    /// Creates a grid by evaluating `f` at every position in row-major order.
    #[must_use]
    pub fn from_fn(size: u8, mut f: impl FnMut(Position) -> T) -> Self {
        let cells = Position::all(size).map(&mut f).collect();
        Self { size, cells }
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        Position::all(self.size)
    }

    /// Returns an iterator over `(position, &cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(&self.cells)
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(
            pos.row() < self.size && pos.col() < self.size,
            "position {pos} out of range for a {size}x{size} board",
            size = self.size,
        );
        usize::from(pos.row()) * usize::from(self.size) + usize::from(pos.col())
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        &self.cells[self.offset(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_cell() {
        let grid = Grid::new(4, true);
        assert_eq!(grid.positions().count(), 16);
        assert!(grid.positions().all(|pos| grid[pos]));
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(3, |pos| u16::from(pos.row()) * 10 + u16::from(pos.col()));
        assert_eq!(grid[Position::new(0, 0)], 0);
        assert_eq!(grid[Position::new(2, 1)], 21);
    }

    #[test]
    fn test_index_mut_writes_single_cell() {
        let mut grid = Grid::new(3, 0u8);
        grid[Position::new(2, 2)] = 9;
        assert_eq!(grid[Position::new(2, 2)], 9);
        assert_eq!(grid.cells().filter(|&(_, &cell)| cell != 0).count(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        let grid = Grid::new(3, 0u8);
        let _ = grid[Position::new(3, 0)];
    }
}
