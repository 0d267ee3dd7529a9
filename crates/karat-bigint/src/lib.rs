//! # karat-bigint
//!
//! Arbitrary precision unsigned integers for the karat workspace.
//!
//! This crate provides:
//! - `BigUint<W>`, a canonical little-endian vector of `W`-bit digits
//! - Decimal parsing and hexadecimal rendering
//! - Carry-propagating addition and two's-complement subtraction
//! - Karatsuba multiplication, with a schoolbook reference
//!
//! ## Canonical Form
//!
//! A value never carries most-significant zero digits; zero is the empty
//! vector. Every public operation trims its result, which is what lets
//! comparison start from digit counts alone.
//!
//! ## Word Width
//!
//! The digit type is a generic parameter bounded by [`karat_word::Word`] and
//! defaults to `u64`. Narrow words (`u8`) are handy for exercising carries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod compare;
pub mod digits;
pub mod error;
pub mod format;
pub mod karatsuba;
pub mod parse;

#[cfg(test)]
mod proptests;

pub use digits::BigUint;
pub use error::ParseError;
pub use karatsuba::schoolbook_mul;
pub use karat_word::Word;
