use queens_core::{CellState, Grid, Position, RegionGrid};

/// Returns `true` if a queen could legally be placed at `pos` given the
/// queens currently on the board.
///
/// A candidate cell is legal iff no Occupied cell shares its row, column,
/// or region, and no Occupied cell is 8-directionally adjacent to it. This
/// is deliberately stricter than the validator's conflict reporting, which
/// never treats adjacency as a conflict category: adjacency is a
/// placement-time rule, not a post-hoc one.
///
/// The cell's own state is ignored; callers filter to Empty cells when that
/// matters.
#[must_use]
pub fn is_placement_legal(board: &Grid<CellState>, regions: &RegionGrid, pos: Position) -> bool {
    board.cells().all(|(other, state)| {
        other == pos
            || !state.is_occupied()
            || (other.row() != pos.row()
                && other.col() != pos.col()
                && regions[other] != regions[pos]
                && !other.is_adjacent_to(pos))
    })
}
