use derive_more::Display;
use queens_core::{CellState, Grid, Position, RegionGrid, RegionId, SolutionGrid};
use rand::{Rng, seq::IndexedRandom as _};

use crate::is_placement_legal;

/// A recommended cell together with the deduction that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The cell to act on.
    pub position: Position,
    /// Why this cell was chosen; presentation layers phrase the message
    /// from this.
    pub reason: HintReason,
}

/// The deduction behind a [`Hint`], in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HintReason {
    /// The stored solution places a queen on this cell.
    #[display("the solution places a queen here")]
    Solution,
    /// This is the only legal cell left in a queen-less row.
    #[display("only legal cell left in row {_0}")]
    RowSingle(u8),
    /// This is the only legal cell left in a queen-less column.
    #[display("only legal cell left in column {_0}")]
    ColumnSingle(u8),
    /// This is the only legal cell left in a queen-less region.
    #[display("only legal cell left in region {_0}")]
    RegionSingle(RegionId),
    /// No deduction applied; an arbitrary empty cell was picked.
    #[display("no deduction found; try this empty cell")]
    RandomEmpty,
}

/// Recommends a single cell, or `None` when the board has nothing left to
/// suggest.
///
/// Deductions are tried in order and the first success wins:
///
/// 1. With a stored solution: the first cell (row-major) that the solution
///    occupies but the board does not.
/// 2. A row without a queen that has exactly one placement-legal Empty cell.
/// 3. The same for columns, then for regions.
/// 4. A uniformly random Empty cell.
///
/// Placement legality is the strict rule of
/// [`is_placement_legal`](crate::is_placement_legal), which also accounts
/// for adjacency.
pub fn find_hint<R: Rng + ?Sized>(
    board: &Grid<CellState>,
    regions: &RegionGrid,
    solution: Option<&SolutionGrid>,
    rng: &mut R,
) -> Option<Hint> {
    if let Some(solution) = solution
        && let Some(position) = solution_hint(board, solution)
    {
        return Some(Hint {
            position,
            reason: HintReason::Solution,
        });
    }
    row_single(board, regions)
        .or_else(|| column_single(board, regions))
        .or_else(|| region_single(board, regions))
        .or_else(|| random_empty(board, rng))
}

/// First cell the solution occupies but the board does not. The cell may
/// currently be Marked; the hint still points at it.
fn solution_hint(board: &Grid<CellState>, solution: &SolutionGrid) -> Option<Position> {
    board
        .positions()
        .find(|&pos| solution.is_queen(pos) && !board[pos].is_occupied())
}

/// Returns the single legal Empty cell among `cells`, if there is exactly
/// one; the shared core of the row, column, and region deductions.
fn lone_legal_cell(
    board: &Grid<CellState>,
    regions: &RegionGrid,
    cells: impl Iterator<Item = Position>,
) -> Option<Position> {
    let mut lone = None;
    for pos in cells {
        if board[pos].is_empty() && is_placement_legal(board, regions, pos) {
            if lone.is_some() {
                return None;
            }
            lone = Some(pos);
        }
    }
    lone
}

fn row_single(board: &Grid<CellState>, regions: &RegionGrid) -> Option<Hint> {
    let size = board.size();
    (0..size).find_map(|row| {
        let cells = (0..size).map(|col| Position::new(row, col));
        if cells.clone().any(|pos| board[pos].is_occupied()) {
            return None;
        }
        lone_legal_cell(board, regions, cells).map(|position| Hint {
            position,
            reason: HintReason::RowSingle(row),
        })
    })
}

fn column_single(board: &Grid<CellState>, regions: &RegionGrid) -> Option<Hint> {
    let size = board.size();
    (0..size).find_map(|col| {
        let cells = (0..size).map(|row| Position::new(row, col));
        if cells.clone().any(|pos| board[pos].is_occupied()) {
            return None;
        }
        lone_legal_cell(board, regions, cells).map(|position| Hint {
            position,
            reason: HintReason::ColumnSingle(col),
        })
    })
}

fn region_single(board: &Grid<CellState>, regions: &RegionGrid) -> Option<Hint> {
    let count = u8::try_from(regions.region_count()).unwrap_or(u8::MAX);
    (0..count).map(RegionId::new).find_map(|id| {
        if regions
            .region_positions(id)
            .any(|pos| board[pos].is_occupied())
        {
            return None;
        }
        lone_legal_cell(board, regions, regions.region_positions(id)).map(|position| Hint {
            position,
            reason: HintReason::RegionSingle(id),
        })
    })
}

fn random_empty<R: Rng + ?Sized>(board: &Grid<CellState>, rng: &mut R) -> Option<Hint> {
    let empties: Vec<Position> = board
        .cells()
        .filter_map(|(pos, state)| state.is_empty().then_some(pos))
        .collect();
    empties.choose(rng).map(|&position| Hint {
        position,
        reason: HintReason::RandomEmpty,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(99)
    }

    /// 5x5 board with horizontal stripe regions (region = row).
    fn stripe_regions() -> RegionGrid {
        Grid::from_fn(5, |pos| RegionId::new(pos.row()))
    }

    /// A valid 5-queens placement compatible with stripe regions.
    fn sample_solution() -> SolutionGrid {
        SolutionGrid::from_queens(
            5,
            &[
                Position::new(0, 0),
                Position::new(1, 2),
                Position::new(2, 4),
                Position::new(3, 1),
                Position::new(4, 3),
            ],
        )
    }

    #[test]
    fn test_solution_hint_takes_priority() {
        let board = Grid::new(5, CellState::Empty);
        let hint = find_hint(&board, &stripe_regions(), Some(&sample_solution()), &mut rng())
            .expect("empty board always has a hint");
        assert_eq!(hint.reason, HintReason::Solution);
        assert_eq!(hint.position, Position::new(0, 0));
    }

    #[test]
    fn test_solution_hint_skips_placed_queens_and_points_at_marked_cells() {
        let solution = sample_solution();
        let mut board = Grid::new(5, CellState::Empty);
        board[Position::new(0, 0)] = CellState::Occupied;
        board[Position::new(1, 2)] = CellState::Marked;

        let hint = find_hint(&board, &stripe_regions(), Some(&solution), &mut rng()).unwrap();
        assert_eq!(hint.position, Position::new(1, 2));
        assert_eq!(hint.reason, HintReason::Solution);
    }

    #[test]
    fn test_hint_never_contradicts_stored_solution() {
        let solution = sample_solution();
        let regions = stripe_regions();
        let mut board = Grid::new(5, CellState::Empty);
        // Scatter some player state while the board still disagrees with
        // the solution somewhere.
        board[Position::new(0, 0)] = CellState::Occupied;
        board[Position::new(2, 2)] = CellState::Marked;

        for _ in 0..16 {
            let hint = find_hint(&board, &regions, Some(&solution), &mut rng()).unwrap();
            assert!(solution.is_queen(hint.position));
        }
    }

    #[test]
    fn test_row_deduction_without_solution() {
        let regions = stripe_regions();
        let mut board = Grid::new(5, CellState::Empty);
        // Row 0 has no queen; mark every cell except (0, 4).
        for col in 0..4 {
            board[Position::new(0, col)] = CellState::Marked;
        }

        let hint = find_hint(&board, &regions, None, &mut rng()).unwrap();
        assert_eq!(hint.position, Position::new(0, 4));
        assert_eq!(hint.reason, HintReason::RowSingle(0));
    }

    #[test]
    fn test_column_deduction_without_solution() {
        // Column-stripe regions; column 0 is narrowed to a single cell.
        // Rows all keep several legal cells, so the column single fires
        // first (before the region single, which would also match).
        let regions: RegionGrid = Grid::from_fn(5, |pos| RegionId::new(pos.col()));
        let mut board = Grid::new(5, CellState::Empty);
        for row in 0..4 {
            board[Position::new(row, 0)] = CellState::Marked;
        }

        let hint = find_hint(&board, &regions, None, &mut rng()).unwrap();
        assert_eq!(hint.position, Position::new(4, 0));
        assert_eq!(hint.reason, HintReason::ColumnSingle(0));
    }

    #[test]
    fn test_region_deduction_without_solution() {
        // Region R0 is the 2x2 block in the top-left corner; marking three
        // of its cells leaves (1, 1) as its lone legal cell. Every
        // queen-less row and column still has at least two legal cells, so
        // only the region deduction fires.
        let regions: RegionGrid = Grid::from_fn(5, |pos| {
            if pos.row() < 2 && pos.col() < 2 {
                RegionId::new(0)
            } else if pos.col() == 0 {
                RegionId::new(1)
            } else {
                RegionId::new(pos.col())
            }
        });
        let mut board = Grid::new(5, CellState::Empty);
        for pos in [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)] {
            board[pos] = CellState::Marked;
        }

        let hint = find_hint(&board, &regions, None, &mut rng()).unwrap();
        assert_eq!(hint.position, Position::new(1, 1));
        assert_eq!(hint.reason, HintReason::RegionSingle(RegionId::new(0)));
    }

    #[test]
    fn test_random_fallback_returns_empty_cell() {
        let regions = stripe_regions();
        let mut board = Grid::new(5, CellState::Empty);
        // Two queens so every line has candidates but no line is down to a
        // single legal cell; several cells stay empty.
        board[Position::new(0, 0)] = CellState::Occupied;
        board[Position::new(2, 2)] = CellState::Occupied;

        let hint = find_hint(&board, &regions, None, &mut rng()).unwrap();
        assert!(board[hint.position].is_empty());
    }

    #[test]
    fn test_no_hint_when_no_cell_is_empty() {
        let regions = stripe_regions();
        let all_marked = Grid::new(5, CellState::Marked);
        assert!(find_hint(&all_marked, &regions, None, &mut rng()).is_none());
    }
}
