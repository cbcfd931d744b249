use std::collections::{HashMap, HashSet};

use queens_core::{CellState, Grid, Position, RegionGrid, SolutionGrid};
use queens_generator::{BoardSeed, GeneratedBoard};
use queens_solver::{Hint, find_hint};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

use crate::validator::{self, Evaluation};

/// One entry of the undo stack: the cell that changed and the state it had
/// before the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The cell the action touched.
    pub position: Position,
    /// The cell's state before the action.
    pub previous: CellState,
}

/// What a board-changing operation left behind: the acted-on cell's new
/// state and a fresh evaluation of the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// The state the cell ended up in.
    pub state: CellState,
    /// The board's evaluation after the change.
    pub evaluation: Evaluation,
}

/// Records which cells each queen auto-marked, and which marks the player
/// placed by hand.
///
/// The player-marked set is what keeps queen removal from stealing the
/// player's own notes: a cell the player marked stays Marked even when an
/// attributed queen leaves the board.
#[derive(Debug, Clone, Default)]
struct AutoMarkLedger {
    attributions: HashMap<Position, Vec<Position>>,
    player_marked: HashSet<Position>,
}

impl AutoMarkLedger {
    fn attribute(&mut self, queen: Position, cell: Position) {
        let cells = self.attributions.entry(queen).or_default();
        if !cells.contains(&cell) {
            cells.push(cell);
        }
    }

    fn take_attributed(&mut self, queen: Position) -> Vec<Position> {
        self.attributions.remove(&queen).unwrap_or_default()
    }

    fn note_player_mark(&mut self, cell: Position) {
        self.player_marked.insert(cell);
    }

    fn forget_player_mark(&mut self, cell: Position) {
        self.player_marked.remove(&cell);
    }

    fn is_player_marked(&self, cell: Position) -> bool {
        self.player_marked.contains(&cell)
    }

    fn reset(&mut self) {
        self.attributions.clear();
        self.player_marked.clear();
    }
}

/// A single play-through of one generated board.
///
/// The session owns the mutable cell grid and everything that moves with
/// it: the undo stack, the auto-mark ledger, and a PRNG for hint
/// tie-breaking. The solution and region grids never change for the
/// session's lifetime.
///
/// Every cell action cycles the cell through Empty → Marked → Occupied →
/// Empty and re-evaluates the board.
///
/// # Example
///
/// ```
/// use queens_core::Position;
/// use queens_game::GameSession;
/// use queens_generator::BoardGenerator;
///
/// let mut session = GameSession::new(BoardGenerator::new(5).generate());
///
/// let pos = Position::new(0, 0);
/// assert!(session.apply_action(pos).state.is_marked());
/// assert!(session.apply_action(pos).state.is_occupied());
///
/// assert!(session.undo().is_some());
/// assert!(session.board()[pos].is_marked());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Grid<CellState>,
    regions: RegionGrid,
    solution: SolutionGrid,
    seed: BoardSeed,
    history: Vec<MoveRecord>,
    ledger: AutoMarkLedger,
    auto_mark: bool,
    rng: Pcg64Mcg,
}

impl GameSession {
    /// Starts a session on `board` with an all-Empty grid and auto-marking
    /// enabled.
    #[must_use]
    pub fn new(board: GeneratedBoard) -> Self {
        Self::with_rng(board, Pcg64Mcg::from_rng(&mut rand::rng()))
    }

    /// Like [`new`](Self::new), but with a caller-supplied PRNG for the
    /// random-hint fallback. Useful for reproducible sessions.
    #[must_use]
    pub fn with_rng(board: GeneratedBoard, rng: Pcg64Mcg) -> Self {
        Self {
            board: Grid::new(board.size, CellState::Empty),
            regions: board.regions,
            solution: board.solution,
            seed: board.seed,
            history: Vec::new(),
            ledger: AutoMarkLedger::default(),
            auto_mark: true,
            rng,
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// The current cell grid.
    #[must_use]
    pub fn board(&self) -> &Grid<CellState> {
        &self.board
    }

    /// The immutable region layout.
    #[must_use]
    pub fn regions(&self) -> &RegionGrid {
        &self.regions
    }

    /// The hidden queen placement the board was generated around.
    #[must_use]
    pub fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    /// The seed that reproduces this session's board.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Whether placing a queen marks out its row, column, and neighborhood.
    #[must_use]
    pub fn auto_mark(&self) -> bool {
        self.auto_mark
    }

    /// The actions applied so far, oldest first. Undo pops from the end.
    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Evaluates the current board.
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        validator::evaluate(&self.board, &self.regions)
    }

    /// Returns `true` if the board is solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.evaluation().is_win()
    }

    /// Cycles the cell at `pos` to its next state and returns the outcome.
    ///
    /// State transitions carry provenance bookkeeping:
    ///
    /// - Empty → Marked records the mark as player-placed.
    /// - Marked → Occupied drops the player-mark record; with auto-marking
    ///   on, the new queen's row, column, and 8-neighborhood are marked
    ///   out and attributed to it.
    /// - Occupied → Empty reverts the marks attributed to the departing
    ///   queen, sparing any the player placed by hand. This cleanup runs
    ///   whether or not auto-marking is currently on.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn apply_action(&mut self, pos: Position) -> ActionOutcome {
        let previous = self.board[pos];
        self.history.push(MoveRecord {
            position: pos,
            previous,
        });

        let state = previous.cycled();
        self.board[pos] = state;
        match state {
            CellState::Marked => self.ledger.note_player_mark(pos),
            CellState::Occupied => {
                self.ledger.forget_player_mark(pos);
                if self.auto_mark {
                    self.propagate_marks(pos);
                }
            }
            CellState::Empty => self.revert_marks(pos),
        }

        ActionOutcome {
            state,
            evaluation: self.evaluation(),
        }
    }

    /// Reverts the most recent action, restoring only the recorded cell.
    ///
    /// Marks that an undone queen spread over the board are left in place;
    /// undo is a cell-level restore, not a reverse propagation.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<ActionOutcome> {
        let record = self.history.pop()?;
        self.board[record.position] = record.previous;
        Some(ActionOutcome {
            state: record.previous,
            evaluation: self.evaluation(),
        })
    }

    /// Empties every cell and discards the history and ledger.
    ///
    /// The solution and regions are untouched; the session can be replayed
    /// on the same board.
    pub fn clear(&mut self) {
        self.board = Grid::new(self.board.size(), CellState::Empty);
        self.history.clear();
        self.ledger.reset();
    }

    /// Recommends a cell to act on, or `None` when no cell is left.
    pub fn request_hint(&mut self) -> Option<Hint> {
        find_hint(&self.board, &self.regions, Some(&self.solution), &mut self.rng)
    }

    /// Turns auto-marking on or off.
    ///
    /// Enabling it mid-game marks out the rows, columns, and neighborhoods
    /// of every queen already on the board.
    pub fn set_auto_mark(&mut self, enabled: bool) {
        self.auto_mark = enabled;
        if enabled {
            let queens: Vec<Position> = self
                .board
                .cells()
                .filter_map(|(pos, state)| state.is_occupied().then_some(pos))
                .collect();
            for queen in queens {
                self.propagate_marks(queen);
            }
        }
    }

    /// Marks every cell ruled out by the queen at `queen` and attributes
    /// the marks to it. Already-Marked cells keep their state but are
    /// attributed too, so removing the queen can clean them up. Occupied
    /// cells are never touched.
    fn propagate_marks(&mut self, queen: Position) {
        let size = self.board.size();
        let row_cells = (0..size).map(|col| Position::new(queen.row(), col));
        let column_cells = (0..size).map(|row| Position::new(row, queen.col()));
        let targets: Vec<Position> = row_cells
            .chain(column_cells)
            .chain(queen.adjacent_neighbors(size))
            .collect();

        for pos in targets {
            if pos == queen || self.board[pos].is_occupied() {
                continue;
            }
            self.board[pos] = CellState::Marked;
            self.ledger.attribute(queen, pos);
        }
    }

    /// Reverts the marks attributed to a removed queen, except the ones
    /// the player placed by hand.
    fn revert_marks(&mut self, queen: Position) {
        for pos in self.ledger.take_attributed(queen) {
            if self.board[pos].is_marked() && !self.ledger.is_player_marked(pos) {
                self.board[pos] = CellState::Empty;
            }
        }
    }
}
