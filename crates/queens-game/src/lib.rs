//! Game rules and session state for the Queens puzzle.
//!
//! A [`GameSession`] plays one generated board: it cycles cells through
//! their three states, tracks every move for undo, spreads and reverts
//! auto-marks with per-queen provenance, and evaluates the board after
//! every change. The validator ([`evaluate`]) is a pure function over the
//! board and its regions; the session calls it so callers never have to.
//!
//! # Example
//!
//! ```
//! use queens_game::{Difficulty, GameSession};
//!
//! let board = Difficulty::Easy.generator().generate();
//! let mut session = GameSession::new(board);
//!
//! // Ask for a hint and place a queen on the suggested cell.
//! let hint = session.request_hint().unwrap();
//! session.apply_action(hint.position);
//! let outcome = session.apply_action(hint.position);
//! assert!(outcome.state.is_occupied());
//! assert!(!outcome.evaluation.has_conflicts());
//! ```

pub use self::{
    difficulty::Difficulty,
    session::{ActionOutcome, GameSession, MoveRecord},
    validator::{Evaluation, evaluate},
};

mod difficulty;
mod session;
mod validator;
