//! Hint deduction for the Queens puzzle.
//!
//! The solver reasons about a partial board: [`is_placement_legal`] decides
//! whether a queen could go on a cell given the queens already placed, and
//! [`find_hint`] recommends a single cell using a fixed priority of
//! deductions (stored solution first, then row / column / region singles,
//! then a random empty cell).

pub use self::{
    hint::{Hint, HintReason, find_hint},
    legality::is_placement_legal,
};

mod hint;
mod legality;
