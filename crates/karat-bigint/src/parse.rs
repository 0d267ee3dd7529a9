//! Decimal text to digit vectors.

use karat_word::{add_word, mul_word, Word};
use std::str::FromStr;

use crate::digits::trim;
use crate::{BigUint, ParseError};

/// Replaces `digits` with `digits * radix + value`.
///
/// Each word is scaled with [`mul_word`]; the high half of the product and
/// the carry from adding the incoming value ride into the next word.
fn scale_and_add<W: Word>(digits: &mut Vec<W>, radix: W, value: W) {
    let mut carry = value;
    for digit in digits.iter_mut() {
        let (scaled, high) = mul_word(*digit, radix);
        // high < radix, so high + overflow never wraps
        let (sum, overflow) = add_word(scaled, carry);
        *digit = sum;
        carry = high + overflow;
    }
    if !carry.is_zero() {
        digits.push(carry);
    }
    trim(digits);
}

impl<W: Word> BigUint<W> {
    /// Parses a string of decimal digits. The empty string is zero.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidCharacter`] on the first character that
    /// is not `'0'..='9'`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::from_str_radix(s, 10)
    }

    /// Parses a string of digits in the given radix (`2..=10`).
    ///
    /// # Errors
    ///
    /// Returns an error if the radix is unsupported or a character is not a
    /// digit below the radix.
    pub fn from_str_radix(s: &str, radix: u8) -> Result<Self, ParseError> {
        if !(2..=10).contains(&radix) {
            return Err(ParseError::UnsupportedRadix(radix));
        }

        let mut digits = Vec::new();
        for (position, character) in s.char_indices() {
            let value = u8::try_from(character)
                .ok()
                .map(|byte| byte.wrapping_sub(b'0'))
                .filter(|value| *value < radix);
            let Some(value) = value else {
                tracing::debug!(%character, position, radix, "rejecting numeric input");
                return Err(ParseError::InvalidCharacter { character, position });
            };
            scale_and_add(&mut digits, W::from_byte(radix), W::from_byte(value));
        }
        Ok(Self::from_digits(digits))
    }
}

impl<W: Word> FromStr for BigUint<W> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
