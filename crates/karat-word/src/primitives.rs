//! Single-word arithmetic with explicit carries.
//!
//! Both primitives return `(value, carry)` pairs so that multi-word
//! algorithms can chain them without ever relying on a wider native type.

use crate::Word;

/// Adds two words, returning `(sum mod base, carry)`.
///
/// The carry is `1` exactly when `a > W::MAX - b`, so it is always `0` or `1`.
#[inline]
#[must_use]
pub fn add_word<W: Word>(a: W, b: W) -> (W, W) {
    if a > W::max_value() - b {
        // a + b - base, computed without leaving the word
        (a - (W::max_value() - b) - W::one(), W::one())
    } else {
        (a + b, W::zero())
    }
}

/// Multiplies two words, returning `(low, high)` with `a * b = high * base + low`.
///
/// Operands are split into half-words so every partial product fits in one
/// word; the cross terms are recombined with [`add_word`].
#[must_use]
pub fn mul_word<W: Word>(a: W, b: W) -> (W, W) {
    if a.is_zero() || b.is_zero() {
        return (W::zero(), W::zero());
    }

    // The whole product fits in a single word.
    if a < (W::max_value() - W::one()) / b {
        return (a * b, W::zero());
    }

    let half = W::HALF_BITS as usize;
    let (p, q) = (a.hi(), a.lo());
    let (x, y) = (b.hi(), b.lo());

    let mut high = p * x;
    let low = q * y;

    // (p*y + q*x) straddles the half-word boundary.
    let (middle, middle_carry) = add_word(p * y, q * x);
    high = high + middle.hi() + (middle_carry << half);

    let (low, carry) = add_word(middle.lo() << half, low);
    high = high + carry;

    (low, high)
}
