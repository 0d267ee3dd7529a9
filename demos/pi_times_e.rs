//! Multiplies two decimal integers and prints the long-multiplication layout.
//!
//! By default this multiplies 64-digit truncations of π and e using 8-bit
//! words, which pushes every operation through many carries.
//!
//! Run with: cargo run --example pi_times_e -- --word-bits 64

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use karat::prelude::*;
use tracing_subscriber::EnvFilter;

const PI: &str = "3141592653589793238462643383279502884197169399375105820974944592";
const E: &str = "2718281828459045235360287471352662497757247093699959574966967627";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WordBits {
    #[value(name = "8")]
    U8,
    #[value(name = "16")]
    U16,
    #[value(name = "32")]
    U32,
    #[value(name = "64")]
    U64,
    #[value(name = "128")]
    U128,
}

/// Multiply two decimal integers with Karatsuba and print the product in hex.
#[derive(Debug, Parser)]
#[command(name = "pi_times_e")]
struct Args {
    /// Left operand in decimal
    #[arg(default_value = PI)]
    lhs: String,

    /// Right operand in decimal
    #[arg(default_value = E)]
    rhs: String,

    /// Digit width in bits
    #[arg(long = "word-bits", value_enum, default_value = "8")]
    word_bits: WordBits,

    /// Column the output is right-aligned to
    #[arg(long, default_value_t = 110)]
    width: usize,
}

fn solve<W: Word>(args: &Args) -> Result<()> {
    let lhs = BigUint::<W>::parse(&args.lhs)
        .with_context(|| format!("failed to parse left operand {:?}", args.lhs))?;
    let rhs = BigUint::<W>::parse(&args.rhs)
        .with_context(|| format!("failed to parse right operand {:?}", args.rhs))?;
    tracing::info!(
        word_bits = W::BITS,
        lhs_digits = lhs.len(),
        rhs_digits = rhs.len(),
        "parsed operands"
    );

    let product = &lhs * &rhs;
    tracing::info!(product_digits = product.len(), "multiplied");

    let width = args.width;
    println!("Solving:");
    println!("{lhs:>width$}");
    println!("x{rhs:>w$}", w = width.saturating_sub(1));
    println!("{}", "-".repeat(width));
    println!("{product:>width$}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    match args.word_bits {
        WordBits::U8 => solve::<u8>(&args),
        WordBits::U16 => solve::<u16>(&args),
        WordBits::U32 => solve::<u32>(&args),
        WordBits::U64 => solve::<u64>(&args),
        WordBits::U128 => solve::<u128>(&args),
    }
}
