//! Reproducible seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use serde::ser::{Serialize, Serializer};
use sha2::{Digest as _, Sha256};

/// Seed material for one generation run.
///
/// A seed fixes the entire random stream of a generation call, so the same
/// seed and configuration always produce the same puzzle. Seeds render as 64
/// hexadecimal characters and parse back from the same form.
///
/// # Examples
///
/// ```
/// use numcross_generator::PuzzleSeed;
///
/// let hex = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: PuzzleSeed = hex.parse().unwrap();
/// assert_eq!(seed.to_string(), hex);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary bytes by hashing them with SHA-256.
    ///
    /// Useful for turning a human-memorable phrase into a stable seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use numcross_generator::PuzzleSeed;
    ///
    /// assert_eq!(PuzzleSeed::derive(b"friday"), PuzzleSeed::derive(b"friday"));
    /// assert_ne!(PuzzleSeed::derive(b"friday"), PuzzleSeed::derive(b"monday"));
    /// ```
    #[must_use]
    pub fn derive(material: &[u8]) -> Self {
        Self(Sha256::digest(material).into())
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParsePuzzleSeedError::InvalidLength { len });
        }
        let mut bytes = [0_u8; 32];
        for (i, ch) in s.chars().enumerate() {
            let Some(digit) = ch.to_digit(16) else {
                return Err(ParsePuzzleSeedError::InvalidCharacter { ch });
            };
            let byte = &mut bytes[i / 2];
            *byte = (*byte << 4) | digit as u8;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for PuzzleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Errors from parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleSeedError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("invalid hex character {ch:?} in seed")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_parse_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut bytes = [0_u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::try_from(i).unwrap().wrapping_mul(7);
        }
        let seed = PuzzleSeed::from_bytes(bytes);
        assert_eq!(seed.into_bytes(), bytes);
        assert_eq!(seed.to_string().len(), 64);
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidCharacter { ch: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // Two independent draws colliding on 256 bits would point at a
        // broken source, not bad luck.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    #[test]
    fn test_derive_is_stable() {
        let seed = PuzzleSeed::derive(b"lazy sunday");
        assert_eq!(seed, PuzzleSeed::derive(b"lazy sunday"));
        assert_ne!(seed, PuzzleSeed::derive(b"lazy monday"));
        assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(serde_json::to_value(seed).unwrap(), HEX);
    }
}
