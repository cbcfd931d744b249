//! Board generation for the Queens puzzle.
//!
//! Generation runs in two stages: a randomized backtracking search places
//! one queen per column so that no two queens attack each other, then the
//! region partitioner grows one connected colored region around each queen.
//! Every generated board is solvable by construction — the generated
//! placement satisfies all four puzzle constraints.
//!
//! Generation is reproducible: a [`BoardSeed`] fully determines the output.
//!
//! # Example
//!
//! ```
//! use queens_generator::BoardGenerator;
//!
//! let board = BoardGenerator::new(6).generate();
//! assert_eq!(board.solution.queens().count(), 6);
//! assert_eq!(board.regions.region_count(), 6);
//!
//! // The same seed reproduces the same board.
//! let again = BoardGenerator::new(6).generate_with_seed(board.seed);
//! assert_eq!(again.regions, board.regions);
//! ```

use queens_core::{RegionGrid, SolutionGrid};

pub use self::seed::{BoardSeed, ParseSeedError};

mod partition;
mod seed;
mod solution;

/// A generated board: the hidden queen placement, the region partition, and
/// the seed that produced them.
///
/// Both grids are immutable for the lifetime of a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// Board side length.
    pub size: u8,
    /// The queen placement the partition was built around.
    pub solution: SolutionGrid,
    /// One connected region per queen, ids dense in `[0, size)`.
    pub regions: RegionGrid,
    /// The seed that reproduces this board.
    pub seed: BoardSeed,
}

/// Generates solvable Queens boards of a fixed size.
///
/// The generator is stateless; each call draws a fresh seed (or takes one
/// explicitly) and derives everything from it.
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator {
    size: u8,
}

impl BoardGenerator {
    /// Creates a generator for `size`×`size` boards.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; callers choose from the supported board
    /// sizes, so a zero size is a programming error.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self { size }
    }

    /// Returns the board side length this generator produces.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = seed.rng();
        let solution = solution::generate_solution(self.size, &mut rng);
        let regions = partition::partition(&solution, &mut rng);
        GeneratedBoard {
            size: self.size,
            solution,
            regions,
            seed,
        }
    }
}
