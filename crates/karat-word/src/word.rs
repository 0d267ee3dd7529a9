//! The fixed-width digit trait.

use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, LowerHex};
use std::hash::Hash;

/// An unsigned fixed-width integer usable as one digit of a big integer.
///
/// The base of a digit vector built from `W` is `2^W::BITS`.
pub trait Word:
    PrimInt + Unsigned + From<u8> + Default + Hash + Debug + LowerHex + Send + Sync + 'static
{
    /// Width of the word in bits.
    const BITS: u32;

    /// Width of a half-word in bits.
    const HALF_BITS: u32 = Self::BITS / 2;

    /// Number of hexadecimal characters needed to print one full word.
    const HEX_WIDTH: usize = (Self::BITS / 4) as usize;

    /// Widens a byte into a word.
    #[must_use]
    fn from_byte(value: u8) -> Self {
        <Self as From<u8>>::from(value)
    }

    /// Mask selecting the low half of a word.
    #[must_use]
    fn lo_mask() -> Self {
        (Self::one() << Self::HALF_BITS as usize) - Self::one()
    }

    /// Returns the low half of the word.
    #[must_use]
    fn lo(self) -> Self {
        self & Self::lo_mask()
    }

    /// Returns the high half of the word, shifted down.
    #[must_use]
    fn hi(self) -> Self {
        self >> Self::HALF_BITS as usize
    }
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
