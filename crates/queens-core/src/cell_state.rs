use derive_more::IsVariant;

/// The mutable state of a single board cell during play.
///
/// Every player action on a cell advances it one step through the fixed
/// cycle `Empty → Marked → Occupied → Empty`; there are no other
/// transitions.
///
/// # Example
///
/// ```
/// use queens_core::CellState;
///
/// let state = CellState::Empty;
/// assert_eq!(state.cycled(), CellState::Marked);
/// assert_eq!(state.cycled().cycled(), CellState::Occupied);
/// assert_eq!(state.cycled().cycled().cycled(), CellState::Empty);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// The cell is untouched.
    #[default]
    Empty,
    /// The cell is excluded, either by the player or by auto-mark
    /// propagation (usually rendered as an "X").
    Marked,
    /// The cell holds a queen.
    Occupied,
}

impl CellState {
    /// Returns the next state in the action cycle.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Empty => Self::Marked,
            Self::Marked => Self::Occupied,
            Self::Occupied => Self::Empty,
        }
    }
}
