use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying a generated board.
///
/// A seed fully determines the generated solution and region partition, so
/// boards can be reproduced, shared, and benchmarked. Seeds display as (and
/// parse from) a 64-digit lowercase hex string.
///
/// # Example
///
/// ```
/// use queens_generator::BoardSeed;
///
/// let seed: BoardSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh random seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Expands the seed into the deterministic PRNG used for generation.
    ///
    /// The seed bytes are hashed with SHA-256 so that structurally similar
    /// seeds (for example, seeds differing in a single byte) still produce
    /// unrelated PRNG streams.
    #[must_use]
    pub fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`BoardSeed`] from its hex string form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// The string contains a non-hex character.
    #[display("invalid hex digit {_0:?} in seed")]
    InvalidDigit(#[error(not(source))] char),
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::InvalidLength(s.chars().count()));
        }
        let digit = |c: char| {
            c.to_digit(16)
                .map(|d| u8::try_from(d).unwrap_or_default())
                .ok_or(ParseSeedError::InvalidDigit(c))
        };
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
                unreachable!("the length test guarantees 64 digits");
            };
            *byte = digit(hi)? << 4 | digit(lo)?;
        }
        Ok(Self(bytes))
    }
}
