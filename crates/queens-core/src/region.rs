use derive_more::Display;

use crate::{Grid, Position};

/// Identifier of a colored region.
///
/// After generation, region identifiers are dense in `[0, N)` for an N×N
/// board: one region per queen. The generator works with sparser
/// provisional identifiers internally and renumbers before publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("R{_0}")]
pub struct RegionId(u8);

impl RegionId {
    /// Creates a region identifier.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the identifier as a container index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The region partition of a board: one [`RegionId`] per cell.
///
/// Invariants maintained by the generator: every region is 4-directionally
/// connected, identifiers are dense in `[0, N)`, and each region contains
/// exactly one queen of the accompanying
/// [`SolutionGrid`](crate::SolutionGrid).
pub type RegionGrid = Grid<RegionId>;

impl Grid<RegionId> {
    /// Returns the number of distinct regions.
    ///
    /// Identifiers are dense, so this is the largest identifier plus one.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.cells()
            .map(|(_, id)| id.index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns all positions belonging to `id`, in row-major order.
    pub fn region_positions(&self, id: RegionId) -> impl Iterator<Item = Position> {
        self.cells()
            .filter_map(move |(pos, &cell)| (cell == id).then_some(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_board(size: u8) -> RegionGrid {
        Grid::from_fn(size, |pos| RegionId::new((pos.row() + pos.col()) % 2))
    }

    #[test]
    fn test_region_count() {
        assert_eq!(checker_board(4).region_count(), 2);
        assert_eq!(Grid::new(3, RegionId::new(0)).region_count(), 1);
    }

    #[test]
    fn test_region_positions_filters_by_id() {
        let regions = checker_board(2);
        let zero: Vec<_> = regions.region_positions(RegionId::new(0)).collect();
        assert_eq!(zero, [Position::new(0, 0), Position::new(1, 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(RegionId::new(3).to_string(), "R3");
    }
}
