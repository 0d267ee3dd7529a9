//! # karat-word
//!
//! Machine-word arithmetic for the karat big integer engine.
//!
//! This crate provides:
//! - The `Word` capability trait for fixed-width unsigned digits
//! - Overflow-detecting addition (`add_word`)
//! - Full-width multiplication without a double-width type (`mul_word`)
//!
//! ## Word Widths
//!
//! `Word` is implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
//! The multiplication primitive only ever multiplies half-words, so `u128`
//! digits work even though Rust has no 256-bit integer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod primitives;
pub mod word;

#[cfg(test)]
mod proptests;

pub use primitives::{add_word, mul_word};
pub use word::Word;
