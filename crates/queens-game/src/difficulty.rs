use derive_more::Display;
use queens_generator::BoardGenerator;

/// Difficulty preset, expressed as a board size.
///
/// Larger boards have more rows, columns, and regions to satisfy at once,
/// and a harder deduction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Difficulty {
    /// 5×5 board.
    #[display("easy")]
    Easy,
    /// 6×6 board.
    #[display("medium")]
    Medium,
    /// 8×8 board.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The board side length this preset plays on.
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            Self::Easy => 5,
            Self::Medium => 6,
            Self::Hard => 8,
        }
    }

    /// A generator producing boards of this preset's size.
    #[must_use]
    pub fn generator(self) -> BoardGenerator {
        BoardGenerator::new(self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(Difficulty::Easy.size(), 5);
        assert_eq!(Difficulty::Medium.size(), 6);
        assert_eq!(Difficulty::Hard.size(), 8);
    }

    #[test]
    fn test_generator_matches_preset() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.generator().size(), difficulty.size());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }
}
