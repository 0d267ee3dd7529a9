//! Total ordering of canonical digit vectors.

use karat_word::Word;
use std::cmp::Ordering;

use crate::BigUint;

/// Compares two canonical little-endian digit slices.
///
/// A shorter slice is smaller; equal lengths are decided by the most
/// significant differing digit.
pub(crate) fn cmp_digits<W: Word>(lhs: &[W], rhs: &[W]) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| {
        lhs.iter()
            .rev()
            .zip(rhs.iter().rev())
            .map(|(l, r)| l.cmp(r))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

impl<W: Word> Ord for BigUint<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(self.digits(), other.digits())
    }
}

impl<W: Word> PartialOrd for BigUint<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Word> PartialEq for BigUint<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Word> Eq for BigUint<W> {}
