//! Placeable number entries.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::ser::{Serialize, Serializer};

/// A multi-digit number used as a puzzle piece.
///
/// An entry is a non-empty string of ASCII digits with no leading zero.
/// Entries are immutable once created; the generator produces them in
/// batches and the placement loop consumes them.
///
/// # Examples
///
/// ```
/// use numcross_core::NumberEntry;
///
/// let entry = NumberEntry::new("4820");
/// assert_eq!(entry.len(), 4);
/// assert_eq!(entry.as_str(), "4820");
///
/// // Untrusted text goes through `FromStr` instead:
/// let parsed: NumberEntry = "913".parse().unwrap();
/// assert_eq!(parsed, NumberEntry::new("913"));
/// ```
///
/// ```should_panic
/// use numcross_core::NumberEntry;
///
/// // This will panic: leading zeros are not valid entries.
/// let _ = NumberEntry::new("042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberEntry {
    digits: String,
}

impl NumberEntry {
    /// Creates an entry from a digit string.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty, contains a non-digit character, or starts
    /// with a zero. Use [`FromStr`] for fallible parsing of untrusted text.
    #[must_use]
    pub fn new(digits: impl Into<String>) -> Self {
        let digits = digits.into();
        match validate(&digits) {
            Ok(()) => Self { digits },
            Err(err) => panic!("invalid number entry {digits:?}: {err}"),
        }
    }

    /// Returns the digit string.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns whether the entry has no digits. Always `false` for a
    /// constructed entry; provided for API completeness.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

fn validate(digits: &str) -> Result<(), ParseNumberEntryError> {
    if digits.is_empty() {
        return Err(ParseNumberEntryError::Empty);
    }
    if let Some(ch) = digits.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(ParseNumberEntryError::NonDigit { ch });
    }
    if digits.starts_with('0') {
        return Err(ParseNumberEntryError::LeadingZero);
    }
    Ok(())
}

impl FromStr for NumberEntry {
    type Err = ParseNumberEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Self {
            digits: s.to_owned(),
        })
    }
}

impl Display for NumberEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl AsRef<str> for NumberEntry {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl Serialize for NumberEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.digits)
    }
}

/// Errors from parsing a [`NumberEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseNumberEntryError {
    /// The input contained no characters.
    #[display("number entry is empty")]
    Empty,
    /// The input contained a character that is not an ASCII digit.
    #[display("invalid character {ch:?} in number entry")]
    NonDigit {
        /// The offending character.
        ch: char,
    },
    /// The input started with a zero digit.
    #[display("number entry has a leading zero")]
    LeadingZero,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_basic_operations() {
        let entry = NumberEntry::new("482");
        assert_eq!(entry.len(), 3);
        assert!(!entry.is_empty());
        assert_eq!(entry.as_str(), "482");
        assert_eq!(entry.to_string(), "482");
        assert_eq!(entry.as_ref(), "482");
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(
            "".parse::<NumberEntry>(),
            Err(ParseNumberEntryError::Empty)
        );
        assert_eq!(
            "12a4".parse::<NumberEntry>(),
            Err(ParseNumberEntryError::NonDigit { ch: 'a' })
        );
        assert_eq!(
            "0123".parse::<NumberEntry>(),
            Err(ParseNumberEntryError::LeadingZero)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseNumberEntryError::NonDigit { ch: 'x' }.to_string(),
            "invalid character 'x' in number entry"
        );
        assert_eq!(
            ParseNumberEntryError::LeadingZero.to_string(),
            "number entry has a leading zero"
        );
    }

    #[test]
    #[should_panic(expected = "invalid number entry \"007\"")]
    fn test_new_leading_zero_panics() {
        let _ = NumberEntry::new("007");
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let entry = NumberEntry::new("9173");
        assert_eq!(serde_json::to_value(&entry).unwrap(), "9173");
    }

    proptest! {
        #[test]
        fn test_valid_digit_strings_round_trip(s in "[1-9][0-9]{0,8}") {
            let entry: NumberEntry = s.parse().unwrap();
            prop_assert_eq!(entry.len(), s.len());
            prop_assert_eq!(entry.to_string(), s);
        }

        #[test]
        fn test_parse_never_panics(s in "\\PC{0,12}") {
            let _ = s.parse::<NumberEntry>();
        }
    }
}
