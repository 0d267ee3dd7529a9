//! Property-based tests for the word primitives.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{add_word, mul_word};

    // Widening oracles; u128 words are checked through their halves instead.
    macro_rules! widening_props {
        ($name:ident, $word:ty, $wide:ty) => {
            mod $name {
                use super::*;

                proptest! {
                    #[test]
                    fn add_matches_widening(a in any::<$word>(), b in any::<$word>()) {
                        let (sum, carry) = add_word(a, b);
                        let wide = <$wide>::from(a) + <$wide>::from(b);
                        prop_assert!(carry <= 1);
                        prop_assert_eq!(
                            (<$wide>::from(carry) << <$word>::BITS) | <$wide>::from(sum),
                            wide
                        );
                    }

                    #[test]
                    fn mul_matches_widening(a in any::<$word>(), b in any::<$word>()) {
                        let (low, high) = mul_word(a, b);
                        let wide = <$wide>::from(a) * <$wide>::from(b);
                        prop_assert_eq!(
                            (<$wide>::from(high) << <$word>::BITS) | <$wide>::from(low),
                            wide
                        );
                    }

                    #[test]
                    fn mul_commutative(a in any::<$word>(), b in any::<$word>()) {
                        prop_assert_eq!(mul_word(a, b), mul_word(b, a));
                    }
                }
            }
        };
    }

    widening_props!(word_u8, u8, u16);
    widening_props!(word_u16, u16, u32);
    widening_props!(word_u32, u32, u64);
    widening_props!(word_u64, u64, u128);

    proptest! {
        #[test]
        fn u128_mul_by_one_is_identity(a in any::<u128>()) {
            prop_assert_eq!(mul_word(a, 1), (a, 0));
        }

        #[test]
        fn u128_low_word_matches_wrapping(a in any::<u128>(), b in any::<u128>()) {
            let (low, _) = mul_word(a, b);
            prop_assert_eq!(low, a.wrapping_mul(b));
        }

        #[test]
        fn u128_high_word_of_split_operands(a in any::<u64>(), b in any::<u64>()) {
            // (a * 2^64) * (b * 2^64) = a * b * 2^128
            let (low, high) = mul_word(u128::from(a) << 64, u128::from(b) << 64);
            prop_assert_eq!(low, 0);
            prop_assert_eq!(high, u128::from(a) * u128::from(b));
        }
    }
}
