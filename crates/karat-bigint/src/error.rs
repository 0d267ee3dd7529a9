//! Errors raised while building big integers from text.

use thiserror::Error;

/// Errors that can occur while parsing a `BigUint`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is not a digit of the requested radix.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// The radix is outside `2..=10`.
    #[error("unsupported radix {0}, expected 2..=10")]
    UnsupportedRadix(u8),
}

impl ParseError {
    /// Returns the offending character, if any.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        match self {
            ParseError::InvalidCharacter { character, .. } => Some(*character),
            ParseError::UnsupportedRadix(_) => None,
        }
    }
}
