//! Addition and subtraction.
//!
//! Addition walks both operands in lockstep, reading an implicit zero past
//! the end of the shorter one. Subtraction negates the right-hand side in
//! two's complement and reuses addition.

use karat_word::{add_word, Word};
use std::ops::{Add, Sub};

use crate::digits::trim;
use crate::BigUint;

/// Adds two digit slices without trimming.
///
/// The result always has `max(len) + 1` digits, the last one being the
/// terminal carry.
pub(crate) fn add_raw<W: Word>(lhs: &[W], rhs: &[W]) -> Vec<W> {
    let longest = lhs.len().max(rhs.len());
    let mut sum = Vec::with_capacity(longest + 1);
    let mut carry = W::zero();

    for i in 0..longest {
        let l = lhs.get(i).copied().unwrap_or_else(W::zero);
        let r = rhs.get(i).copied().unwrap_or_else(W::zero);
        let (partial, c1) = add_word(l, r);
        let (digit, c2) = add_word(partial, carry);
        sum.push(digit);
        // c1 and c2 cannot both be set
        carry = c1 + c2;
    }
    sum.push(carry);
    sum
}

/// Computes `lhs - rhs` in two's complement. Requires `lhs >= rhs`.
///
/// With `n = lhs.len()`, `!rhs + 1` is `base^n - rhs` modulo `base^n`, so
/// dropping the carry out of digit `n - 1` of `lhs + (!rhs + 1)` leaves the
/// difference.
pub(crate) fn sub_unchecked<W: Word>(lhs: &[W], rhs: &[W]) -> BigUint<W> {
    debug_assert!(rhs.len() <= lhs.len());
    let n = lhs.len();

    let complement: Vec<W> = (0..n)
        .map(|i| !rhs.get(i).copied().unwrap_or_else(W::zero))
        .collect();
    let negated = add_raw(&complement, &[W::one()]);

    let mut difference = add_raw(lhs, &negated[..n]);
    difference.truncate(n);
    trim(&mut difference);
    BigUint::from_digits(difference)
}

impl<W: Word> BigUint<W> {
    /// Computes `self - rhs`, returning `None` if `rhs > self`.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            None
        } else {
            Some(sub_unchecked(self.digits(), rhs.digits()))
        }
    }
}

fn add_ref<W: Word>(lhs: &BigUint<W>, rhs: &BigUint<W>) -> BigUint<W> {
    BigUint::from_digits(add_raw(lhs.digits(), rhs.digits()))
}

fn sub_ref<W: Word>(lhs: &BigUint<W>, rhs: &BigUint<W>) -> BigUint<W> {
    match lhs.checked_sub(rhs) {
        Some(difference) => difference,
        None => panic!("attempt to subtract with overflow"),
    }
}

// Arithmetic operations
impl<W: Word> Add for BigUint<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(&self, &rhs)
    }
}

impl<W: Word> Add<&BigUint<W>> for BigUint<W> {
    type Output = Self;

    fn add(self, rhs: &BigUint<W>) -> Self::Output {
        add_ref(&self, rhs)
    }
}

impl<W: Word> Add for &BigUint<W> {
    type Output = BigUint<W>;

    fn add(self, rhs: Self) -> Self::Output {
        add_ref(self, rhs)
    }
}

/// # Panics
///
/// Panics if `rhs > self`; use [`BigUint::checked_sub`] to handle underflow.
impl<W: Word> Sub for BigUint<W> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_ref(&self, &rhs)
    }
}

impl<W: Word> Sub<&BigUint<W>> for BigUint<W> {
    type Output = Self;

    fn sub(self, rhs: &BigUint<W>) -> Self::Output {
        sub_ref(&self, rhs)
    }
}

impl<W: Word> Sub for &BigUint<W> {
    type Output = BigUint<W>;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_ref(self, rhs)
    }
}
