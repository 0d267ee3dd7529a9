//! # karat
//!
//! Arbitrary precision unsigned integer arithmetic built on fixed-width
//! words, with Karatsuba multiplication.
//!
//! ## Features
//!
//! - **Generic Words**: digits may be `u8` through `u128`; no double-width
//!   native type is ever needed
//! - **Canonical Values**: immutable digit vectors without leading zeros
//! - **Karatsuba**: O(n^1.58) multiplication, checked against schoolbook
//!
//! ## Quick Start
//!
//! ```rust
//! use karat::prelude::*;
//!
//! let a: BigUint = "256".parse().unwrap();
//! let b: BigUint = "256".parse().unwrap();
//! assert_eq!((&a * &b).to_hex_string(), "0x10000");
//! assert_eq!(&a - &BigUint::one(), "255".parse::<BigUint>().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use karat_bigint as bigint;
pub use karat_word as word;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use karat_bigint::{schoolbook_mul, BigUint, ParseError};
    pub use karat_word::{add_word, mul_word, Word};
}
