use derive_more::Display;

/// A board coordinate, 0-indexed from the top-left corner.
///
/// A `Position` is just a pair of coordinates; it carries no board size.
/// Bounds are enforced by the containers indexed with it (see
/// [`Grid`](crate::Grid)), and by the neighbor iterators below, which take
/// the board size explicitly.
///
/// # Example
///
/// ```
/// use queens_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Orthogonal neighbor offsets: up, down, left, right.
pub const ORTHOGONAL_OFFSETS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight neighbor offsets, including diagonals.
pub const ADJACENT_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    /// Creates a new position from row and column coordinates.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns an iterator over all positions of a `size`×`size` board in
    /// row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use queens_core::Position;
    ///
    /// let all: Vec<_> = Position::all(2).collect();
    /// assert_eq!(
    ///     all,
    ///     [
    ///         Position::new(0, 0),
    ///         Position::new(0, 1),
    ///         Position::new(1, 0),
    ///         Position::new(1, 1),
    ///     ]
    /// );
    /// ```
    pub fn all(size: u8) -> impl Iterator<Item = Self> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }

    /// Returns the position offset by `(dr, dc)`, if it stays within a
    /// `size`×`size` board.
    #[must_use]
    pub fn offset_by(self, dr: i8, dc: i8, size: u8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self::new(row, col))
    }

    /// Returns the in-bounds orthogonal (4-directional) neighbors.
    pub fn orthogonal_neighbors(self, size: u8) -> impl Iterator<Item = Self> {
        ORTHOGONAL_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset_by(dr, dc, size))
    }

    /// Returns the in-bounds 8-directional neighbors, including diagonals.
    pub fn adjacent_neighbors(self, size: u8) -> impl Iterator<Item = Self> {
        ADJACENT_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset_by(dr, dc, size))
    }

    /// Returns `true` if `other` is 8-directionally adjacent to `self`.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Returns the Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u16 {
        u16::from(self.row.abs_diff(other.row)) + u16::from(self.col.abs_diff(other.col))
    }
}
