//! The canonical digit vector behind `BigUint`.

use karat_word::Word;
use num_traits::{One, Zero};
use std::hash::{Hash, Hasher};

/// An arbitrary precision unsigned integer.
///
/// The value is `Σ digits[i] · 2^(W::BITS · i)`. Digits are stored
/// least-significant first and the vector never ends in a zero digit, so
/// zero is the empty vector.
#[derive(Clone, Default)]
pub struct BigUint<W: Word = u64> {
    digits: Vec<W>,
}

/// Removes most-significant zero digits.
pub(crate) fn trim<W: Word>(digits: &mut Vec<W>) {
    while digits.last().is_some_and(|d| d.is_zero()) {
        digits.pop();
    }
}

impl<W: Word> BigUint<W> {
    /// Returns zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// Returns one.
    #[must_use]
    pub fn one() -> Self {
        Self { digits: vec![W::one()] }
    }

    /// Creates an integer from little-endian digits, trimming any
    /// most-significant zeros.
    #[must_use]
    pub fn from_digits(mut digits: Vec<W>) -> Self {
        trim(&mut digits);
        Self { digits }
    }

    /// Creates an integer from a little-endian digit slice.
    #[must_use]
    pub fn from_slice(digits: &[W]) -> Self {
        Self::from_digits(digits.to_vec())
    }

    /// Returns the little-endian digits.
    #[must_use]
    pub fn digits(&self) -> &[W] {
        &self.digits
    }

    /// Consumes the integer, returning its little-endian digits.
    #[must_use]
    pub fn into_digits(self) -> Vec<W> {
        self.digits
    }

    /// Returns the number of significant digits; zero has none.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if this integer is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Splits at digit index `h` into `(high, low)`.
    ///
    /// `high` holds the digits at index `h` and above and is zero when the
    /// integer is shorter than `h`; `low` holds the rest.
    pub(crate) fn split_at(&self, h: usize) -> (Self, Self) {
        let h = h.min(self.digits.len());
        let (low, high) = self.digits.split_at(h);
        (Self::from_slice(high), Self::from_slice(low))
    }

    /// Multiplies by `base^k` by inserting `k` zero digits at the low end.
    pub(crate) fn shifted(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + k);
        digits.resize(k, W::zero());
        digits.extend_from_slice(&self.digits);
        Self { digits }
    }
}

impl<W: Word> From<W> for BigUint<W> {
    fn from(digit: W) -> Self {
        Self::from_digits(vec![digit])
    }
}

impl<W: Word> Hash for BigUint<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl<W: Word> Zero for BigUint<W> {
    fn zero() -> Self {
        BigUint::zero()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl<W: Word> One for BigUint<W> {
    fn one() -> Self {
        BigUint::one()
    }
}
