use crate::{Grid, Position};

/// An immutable queen placement for an N×N board.
///
/// The generator produces a grid with exactly one queen per row and per
/// column; for sizes where a non-attacking arrangement exists (every size
/// except 2 and 3), no two queens share a diagonal either. The grid is
/// never mutated after creation; a game session keeps it around for win
/// validation and direct hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionGrid {
    grid: Grid<bool>,
}

impl SolutionGrid {
    /// Wraps a boolean queen grid.
    #[must_use]
    pub fn from_grid(grid: Grid<bool>) -> Self {
        Self { grid }
    }

    /// Creates a solution from an explicit list of queen positions.
    ///
    /// # Panics
    ///
    /// Panics if any position is outside the `size`×`size` board.
    #[must_use]
    pub fn from_queens(size: u8, queens: &[Position]) -> Self {
        let mut grid = Grid::new(size, false);
        for &pos in queens {
            grid[pos] = true;
        }
        Self { grid }
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.grid.size()
    }

    /// Returns `true` if the solution places a queen at `pos`.
    #[must_use]
    pub fn is_queen(&self, pos: Position) -> bool {
        self.grid[pos]
    }

    /// Returns all queen positions in row-major order.
    pub fn queens(&self) -> impl Iterator<Item = Position> {
        self.grid
            .cells()
            .filter_map(|(pos, &queen)| queen.then_some(pos))
    }

    /// Checks the classic N-queens non-attack rule: exactly one queen per
    /// row and per column, and no two queens on a shared diagonal.
    #[must_use]
    pub fn satisfies_queens_rule(&self) -> bool {
        let size = self.size();
        let queens: Vec<_> = self.queens().collect();
        if queens.len() != usize::from(size) {
            return false;
        }
        for (i, &a) in queens.iter().enumerate() {
            for &b in &queens[i + 1..] {
                if a.row() == b.row()
                    || a.col() == b.col()
                    || a.row().abs_diff(b.row()) == a.col().abs_diff(b.col())
                {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_queens_round_trips() {
        let queens = [Position::new(0, 1), Position::new(1, 3), Position::new(2, 0)];
        let solution = SolutionGrid::from_queens(4, &queens);
        assert_eq!(solution.queens().collect::<Vec<_>>(), queens);
        assert!(solution.is_queen(Position::new(1, 3)));
        assert!(!solution.is_queen(Position::new(0, 0)));
    }

    #[test]
    fn test_satisfies_queens_rule_accepts_valid_placement() {
        // A classic 5-queens solution.
        let solution = SolutionGrid::from_queens(
            5,
            &[
                Position::new(0, 0),
                Position::new(1, 2),
                Position::new(2, 4),
                Position::new(3, 1),
                Position::new(4, 3),
            ],
        );
        assert!(solution.satisfies_queens_rule());
    }

    #[test]
    fn test_satisfies_queens_rule_rejects_shared_diagonal() {
        let solution = SolutionGrid::from_queens(
            4,
            &[
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 3),
                Position::new(3, 2),
            ],
        );
        assert!(!solution.satisfies_queens_rule());
    }

    #[test]
    fn test_satisfies_queens_rule_rejects_wrong_count() {
        let solution = SolutionGrid::from_queens(4, &[Position::new(0, 0)]);
        assert!(!solution.satisfies_queens_rule());
    }
}
