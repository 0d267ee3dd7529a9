//! Karatsuba multiplication algorithm.
//!
//! This module provides the Karatsuba divide-and-conquer multiplication
//! algorithm, which achieves O(n^1.58) word operations, together with the
//! O(n²) schoolbook product it is checked against.

use karat_word::{add_word, mul_word, Word};
use std::ops::Mul;

use crate::arith::sub_unchecked;
use crate::digits::trim;
use crate::BigUint;

/// Performs Karatsuba multiplication.
///
/// Single-digit operands are multiplied directly; anything longer is split at
/// half the longer operand's length and recombined from three products.
#[must_use]
pub fn karatsuba_mul<W: Word>(lhs: &BigUint<W>, rhs: &BigUint<W>) -> BigUint<W> {
    if lhs.is_zero() || rhs.is_zero() {
        return BigUint::zero();
    }

    // Base case
    if lhs.len() == 1 && rhs.len() == 1 {
        let (low, high) = mul_word(lhs.digits()[0], rhs.digits()[0]);
        return BigUint::from_digits(vec![low, high]);
    }

    let n = lhs.len().max(rhs.len());
    let h = n / 2;

    // Split: lhs = a*B^h + b, rhs = c*B^h + d
    let (a, b) = lhs.split_at(h);
    let (c, d) = rhs.split_at(h);

    let ac = karatsuba_mul(&a, &c);
    let bd = karatsuba_mul(&b, &d);
    let cross = karatsuba_mul(&(&a + &b), &(&c + &d));

    // cross = ac + ad + bc + bd, so this never underflows
    let outer = &ac + &bd;
    let middle = sub_unchecked(cross.digits(), outer.digits());

    // Combine: result = ac*B^(2h) + middle*B^h + bd
    &(&ac.shifted(2 * h) + &middle.shifted(h)) + &bd
}

/// Schoolbook multiplication: O(n²) word products.
#[must_use]
pub fn schoolbook_mul<W: Word>(lhs: &BigUint<W>, rhs: &BigUint<W>) -> BigUint<W> {
    if lhs.is_zero() || rhs.is_zero() {
        return BigUint::zero();
    }

    let mut product = vec![W::zero(); lhs.len() + rhs.len()];
    for (i, &l) in lhs.digits().iter().enumerate() {
        for (j, &r) in rhs.digits().iter().enumerate() {
            let (low, high) = mul_word(l, r);
            accumulate(&mut product, i + j, low);
            accumulate(&mut product, i + j + 1, high);
        }
    }

    trim(&mut product);
    BigUint::from_digits(product)
}

/// Adds `value` into `digits[index]`, rippling the carry upward.
fn accumulate<W: Word>(digits: &mut [W], index: usize, value: W) {
    let mut carry = value;
    for digit in &mut digits[index..] {
        if carry.is_zero() {
            break;
        }
        let (sum, overflow) = add_word(*digit, carry);
        *digit = sum;
        carry = overflow;
    }
}

fn mul_ref<W: Word>(lhs: &BigUint<W>, rhs: &BigUint<W>) -> BigUint<W> {
    tracing::trace!(
        lhs_digits = lhs.len(),
        rhs_digits = rhs.len(),
        word_bits = W::BITS,
        "karatsuba multiply"
    );
    karatsuba_mul(lhs, rhs)
}

impl<W: Word> Mul for BigUint<W> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(&self, &rhs)
    }
}

impl<W: Word> Mul<&BigUint<W>> for BigUint<W> {
    type Output = Self;

    fn mul(self, rhs: &BigUint<W>) -> Self::Output {
        mul_ref(&self, rhs)
    }
}

impl<W: Word> Mul for &BigUint<W> {
    type Output = BigUint<W>;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ref(self, rhs)
    }
}
