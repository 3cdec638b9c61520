//! Error type for word construction and arithmetic

use std::result;
use thiserror::Error;

/// Error type for word construction and arithmetic.
///
/// Every failure names the operation that rejected its input and renders the
/// offending operand, so a message can be traced back to a specific call
/// site without a backtrace.
#[derive(Debug, Error)]
pub enum Error {
    /// An operand lies outside the domain of the operation, such as a
    /// literal wider than the configured word or two words of different
    /// widths handed to a binary operation.
    #[error("[{op}] invalid operand : {detail}")]
    Domain { op: &'static str, detail: String },

    /// An offset failed to resolve against a range bound.
    #[error("[{op}] invalid index : {index} (size {size})")]
    IndexOutOfRange {
        op: &'static str,
        index: i128,
        size: usize,
    },

    /// Divisor of zero in division or remainder.
    #[error("[{op}] division by zero : {dividend}")]
    DivisionByZero { op: &'static str, dividend: String },

    /// A bit offset resolved outside the word's bit length.
    #[error("[{op}] invalid bit index : {index} ({bits} bits)")]
    BitIndexOutOfRange {
        op: &'static str,
        index: i128,
        bits: usize,
    },
}

pub type Result<T> = result::Result<T, Error>;
