//! Hexadecimal rendering.

use karat_word::Word;
use std::fmt::{self, Write};

use crate::BigUint;

impl<W: Word> BigUint<W> {
    /// Writes the hex digits, most significant first, without a prefix or
    /// leading zeros. Zero writes a single `0`.
    fn write_hex_digits(&self, out: &mut String) {
        let mut digits = self.digits().iter().rev();
        match digits.next() {
            // only the top word may be short; every lower word is zero padded
            Some(top) => {
                let _ = write!(out, "{top:x}");
                for digit in digits {
                    let _ = write!(out, "{digit:0width$x}", width = W::HEX_WIDTH);
                }
            }
            None => out.push('0'),
        }
    }

    /// Renders the value as `0x` followed by lowercase hex digits.
    ///
    /// Leading zero nibbles are stripped and zero renders as `0x0`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut out = String::with_capacity(2 + self.len() * W::HEX_WIDTH);
        out.push_str("0x");
        self.write_hex_digits(&mut out);
        out
    }
}

impl<W: Word> fmt::Display for BigUint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex_string())
    }
}

impl<W: Word> fmt::LowerHex for BigUint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::new();
        self.write_hex_digits(&mut digits);
        f.pad_integral(true, "0x", &digits)
    }
}

impl<W: Word> fmt::Debug for BigUint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({})", self.to_hex_string())
    }
}
