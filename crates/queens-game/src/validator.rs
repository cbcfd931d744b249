use std::collections::BTreeSet;

use queens_core::{CellState, Grid, Position, RegionGrid};

/// The validator's verdict on a board: which queens conflict and whether
/// the board is complete.
///
/// A cell can appear in more than one conflict set when it violates
/// several rules at once. Adjacency between queens is deliberately not a
/// conflict category here; the placement rule in `queens-solver` enforces
/// it before a queen ever lands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Queens that share a row with another queen.
    pub row_conflicts: BTreeSet<Position>,
    /// Queens that share a column with another queen.
    pub column_conflicts: BTreeSet<Position>,
    /// Queens that share a region with another queen.
    pub region_conflicts: BTreeSet<Position>,
    /// `true` if every row, every column, and every region holds at least
    /// one queen.
    pub complete: bool,
}

impl Evaluation {
    /// Returns `true` if any conflict set is non-empty.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !(self.row_conflicts.is_empty()
            && self.column_conflicts.is_empty()
            && self.region_conflicts.is_empty())
    }

    /// Returns `true` if the board is solved: complete and conflict-free.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.complete && !self.has_conflicts()
    }

    /// Every conflicting queen, across all three categories.
    #[must_use]
    pub fn conflicts(&self) -> impl Iterator<Item = Position> {
        let mut all = self.row_conflicts.clone();
        all.extend(&self.column_conflicts);
        all.extend(&self.region_conflicts);
        all.into_iter()
    }
}

/// Evaluates a board against its region layout.
///
/// Pure and idempotent: the same board and regions always produce the same
/// [`Evaluation`], and evaluating never changes either input.
#[must_use]
pub fn evaluate(board: &Grid<CellState>, regions: &RegionGrid) -> Evaluation {
    let size = usize::from(board.size());
    let region_count = regions.region_count();

    let mut row_queens = vec![Vec::new(); size];
    let mut column_queens = vec![Vec::new(); size];
    let mut region_queens = vec![Vec::new(); region_count];
    for (pos, state) in board.cells() {
        if state.is_occupied() {
            row_queens[usize::from(pos.row())].push(pos);
            column_queens[usize::from(pos.col())].push(pos);
            region_queens[regions[pos].index()].push(pos);
        }
    }

    let complete = row_queens.iter().all(|queens| !queens.is_empty())
        && column_queens.iter().all(|queens| !queens.is_empty())
        && region_queens.iter().all(|queens| !queens.is_empty());

    Evaluation {
        row_conflicts: crowded(&row_queens),
        column_conflicts: crowded(&column_queens),
        region_conflicts: crowded(&region_queens),
        complete,
    }
}

/// Flattens every group holding two or more queens into a conflict set.
fn crowded(groups: &[Vec<Position>]) -> BTreeSet<Position> {
    groups
        .iter()
        .filter(|queens| queens.len() > 1)
        .flatten()
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use queens_core::RegionId;

    use super::*;

    /// 5x5 board with horizontal stripe regions (region = row).
    fn stripe_regions() -> RegionGrid {
        Grid::from_fn(5, |pos| RegionId::new(pos.row()))
    }

    fn board_with_queens(queens: &[Position]) -> Grid<CellState> {
        let mut board = Grid::new(5, CellState::Empty);
        for &pos in queens {
            board[pos] = CellState::Occupied;
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_conflicts_and_is_incomplete() {
        let board = Grid::new(5, CellState::Empty);
        let evaluation = evaluate(&board, &stripe_regions());
        assert!(!evaluation.has_conflicts());
        assert!(!evaluation.complete);
        assert!(!evaluation.is_win());
    }

    #[test]
    fn test_row_conflict_flags_both_queens() {
        let board = board_with_queens(&[Position::new(0, 0), Position::new(0, 3)]);
        let evaluation = evaluate(&board, &stripe_regions());
        assert_eq!(
            evaluation.row_conflicts,
            [Position::new(0, 0), Position::new(0, 3)].into()
        );
        assert!(evaluation.column_conflicts.is_empty());
        // Stripe regions put both queens in region R0 as well.
        assert_eq!(evaluation.region_conflicts, evaluation.row_conflicts);
        assert!(evaluation.has_conflicts());
        assert!(!evaluation.is_win());
    }

    #[test]
    fn test_column_conflict_flags_both_queens() {
        let board = board_with_queens(&[Position::new(0, 2), Position::new(4, 2)]);
        let evaluation = evaluate(&board, &stripe_regions());
        assert_eq!(
            evaluation.column_conflicts,
            [Position::new(0, 2), Position::new(4, 2)].into()
        );
        assert!(evaluation.row_conflicts.is_empty());
        assert!(evaluation.region_conflicts.is_empty());
    }

    #[test]
    fn test_one_queen_per_line_and_region_wins() {
        let board = board_with_queens(&[
            Position::new(0, 0),
            Position::new(1, 2),
            Position::new(2, 4),
            Position::new(3, 1),
            Position::new(4, 3),
        ]);
        let evaluation = evaluate(&board, &stripe_regions());
        assert!(!evaluation.has_conflicts());
        assert!(evaluation.complete);
        assert!(evaluation.is_win());
    }

    #[test]
    fn test_marked_cells_are_ignored() {
        let mut board = board_with_queens(&[Position::new(0, 0)]);
        board[Position::new(0, 4)] = CellState::Marked;
        let evaluation = evaluate(&board, &stripe_regions());
        assert!(!evaluation.has_conflicts());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_with_queens(&[Position::new(0, 0), Position::new(0, 3)]);
        let regions = stripe_regions();
        assert_eq!(evaluate(&board, &regions), evaluate(&board, &regions));
    }

    #[test]
    fn test_conflicts_iterator_merges_categories() {
        let board = board_with_queens(&[Position::new(0, 0), Position::new(0, 3)]);
        let conflicts: Vec<_> = evaluate(&board, &stripe_regions()).conflicts().collect();
        assert_eq!(conflicts, [Position::new(0, 0), Position::new(0, 3)]);
    }
}
