//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::UBig;
    use proptest::prelude::*;

    use crate::karatsuba::karatsuba_mul;
    use crate::{schoolbook_mul, BigUint};

    // Strategy for generating decimal strings without leading zeros
    fn decimal() -> impl Strategy<Value = String> {
        prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,80}"]
    }

    fn oracle(s: &str) -> UBig {
        UBig::from_str_radix(s, 10).unwrap()
    }

    // Ring laws and oracle checks, instantiated once per word width
    macro_rules! width_props {
        ($name:ident, $word:ty) => {
            mod $name {
                use super::*;

                type Int = BigUint<$word>;

                fn int(s: &str) -> Int {
                    Int::parse(s).unwrap()
                }

                // Strategy for generating raw digit vectors, trailing zeros included
                fn digits() -> impl Strategy<Value = Int> {
                    proptest::collection::vec(any::<$word>(), 0..24).prop_map(Int::from_digits)
                }

                proptest! {
                    #[test]
                    fn parse_matches_oracle(s in decimal()) {
                        prop_assert_eq!(int(&s).to_hex_string(), format!("0x{:x}", oracle(&s)));
                    }

                    #[test]
                    fn add_matches_oracle(a in decimal(), b in decimal()) {
                        let sum = int(&a) + int(&b);
                        prop_assert_eq!(sum.to_hex_string(), format!("0x{:x}", oracle(&a) + oracle(&b)));
                    }

                    #[test]
                    fn mul_matches_oracle(a in decimal(), b in decimal()) {
                        let product = int(&a) * int(&b);
                        prop_assert_eq!(product.to_hex_string(), format!("0x{:x}", oracle(&a) * oracle(&b)));
                    }

                    #[test]
                    fn add_identity(a in digits()) {
                        prop_assert_eq!(&a + &Int::zero(), a.clone());
                        prop_assert_eq!(&Int::zero() + &a, a);
                    }

                    #[test]
                    fn add_commutative(a in digits(), b in digits()) {
                        prop_assert_eq!(&a + &b, &b + &a);
                    }

                    #[test]
                    fn add_associative(a in digits(), b in digits(), c in digits()) {
                        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
                    }

                    #[test]
                    fn add_then_sub(a in digits(), b in digits()) {
                        prop_assert_eq!(&(&a + &b) - &b, a);
                    }

                    #[test]
                    fn checked_sub_agrees_with_order(a in digits(), b in digits()) {
                        prop_assert_eq!(a.checked_sub(&b).is_some(), a >= b);
                    }

                    #[test]
                    fn mul_zero_and_one(a in digits()) {
                        prop_assert!((&a * &Int::zero()).is_zero());
                        prop_assert_eq!(&a * &Int::one(), a);
                    }

                    #[test]
                    fn mul_commutative(a in digits(), b in digits()) {
                        prop_assert_eq!(&a * &b, &b * &a);
                    }

                    #[test]
                    fn distributive(a in digits(), b in digits(), c in digits()) {
                        // a * (b + c) = a * b + a * c
                        let left = &a * &(&b + &c);
                        let right = &(&a * &b) + &(&a * &c);
                        prop_assert_eq!(left, right);
                    }

                    #[test]
                    fn karatsuba_matches_schoolbook(a in digits(), b in digits()) {
                        prop_assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
                    }

                    #[test]
                    fn results_are_canonical(a in digits(), b in digits()) {
                        for result in [&a + &b, &a * &b, karatsuba_mul(&a, &b)] {
                            prop_assert!(result.digits().last().map_or(true, |d| *d != 0));
                        }
                    }

                    #[test]
                    fn trichotomy(a in digits(), b in digits()) {
                        let holds = [a < b, a == b, a > b];
                        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
                    }

                    #[test]
                    fn order_matches_oracle(a in decimal(), b in decimal()) {
                        prop_assert_eq!(int(&a).cmp(&int(&b)), oracle(&a).cmp(&oracle(&b)));
                    }
                }
            }
        };
    }

    width_props!(width_u8, u8);
    width_props!(width_u16, u16);
    width_props!(width_u32, u32);
    width_props!(width_u64, u64);
    width_props!(width_u128, u128);
}
