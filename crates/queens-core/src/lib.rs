//! Core board primitives for the Queens puzzle.
//!
//! This crate defines the data model shared by the generator, solver, and
//! game crates:
//!
//! - [`Position`] — a 0-indexed `(row, col)` board coordinate
//! - [`Grid`] — a square, row-major container indexed by [`Position`]
//! - [`CellState`] — the three mutable per-cell states during play
//! - [`SolutionGrid`] — an immutable queen placement produced by the generator
//! - [`RegionId`] / [`RegionGrid`] — the colored-region partition of the board
//!
//! Board sizes are dynamic (the playable sizes are 5, 6, and 8), so all
//! containers carry their size at runtime rather than in the type.

pub use self::{
    cell_state::CellState,
    grid::Grid,
    position::{ADJACENT_OFFSETS, ORTHOGONAL_OFFSETS, Position},
    region::{RegionGrid, RegionId},
    solution::SolutionGrid,
};

mod cell_state;
mod grid;
mod position;
mod region;
mod solution;
