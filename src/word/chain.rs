//! Carry-chain composition of per-digit table lookups.
//!
//! Addition and subtraction fold the digit-pair table across the word from
//! the least significant digit upward, picking the `add0`/`add1` (or
//! `sub0`/`sub1`) entry according to the carry or borrow produced one
//! position earlier. The carry out of the most significant digit is
//! discarded, which is what makes the arithmetic modular. The carry-free
//! operations are plain per-digit maps.

use crate::digit::{digit_row, pair_row, Digit};
use crate::error::Result;
use crate::word::promote::arith_hint;
use crate::word::Word;

/// Chained addition over two equal-length digit sequences. The final carry
/// is discarded.
pub(super) fn add_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut out = vec![Digit::truncate(0); a.len()];
    let mut carry = false;

    for i in (0..a.len()).rev() {
        let (c, digit) = pair_row(a[i], b[i]).add[carry as usize];

        out[i] = digit;
        carry = c;
    }

    out
}

/// Chained subtraction over two equal-length digit sequences. The final
/// borrow is discarded, so underflow wraps.
pub(super) fn sub_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut out = vec![Digit::truncate(0); a.len()];
    let mut borrow = false;

    for i in (0..a.len()).rev() {
        let (b_out, digit) = pair_row(a[i], b[i]).sub[borrow as usize];

        out[i] = digit;
        borrow = b_out;
    }

    out
}

pub(super) fn not_digits(a: &[Digit]) -> Vec<Digit> {
    a.iter().map(|d| digit_row(*d).not).collect()
}

/// Increment chain: bump the least significant digit and ripple the carry
/// upward only as far as it reaches. Wraps at the top.
pub(super) fn inc_digits(a: &[Digit]) -> Vec<Digit> {
    let mut out = a.to_vec();

    for i in (0..out.len()).rev() {
        let (carry, digit) = digit_row(out[i]).inc;

        out[i] = digit;

        if !carry {
            break;
        }
    }

    out
}

/// Decrement chain, the borrow mirror of `inc_digits`. Wraps at zero.
pub(super) fn dec_digits(a: &[Digit]) -> Vec<Digit> {
    let mut out = a.to_vec();

    for i in (0..out.len()).rev() {
        let (borrow, digit) = digit_row(out[i]).dec;

        out[i] = digit;

        if !borrow {
            break;
        }
    }

    out
}

/// Two's-complement negation of a digit sequence.
pub(super) fn neg_digits(a: &[Digit]) -> Vec<Digit> {
    inc_digits(&not_digits(a))
}

/// Left shift by one with an injected incoming bit, as a digit chain: each
/// digit's `shl1` row yields its overflow bit and shifted nybble, and the
/// overflow becomes the next digit's low bit. The top overflow is
/// discarded.
pub(super) fn shl1_digits(a: &[Digit], low_bit: bool) -> Vec<Digit> {
    let mut out = vec![Digit::truncate(0); a.len()];
    let mut carry = low_bit;

    for i in (0..a.len()).rev() {
        let (overflow, shifted) = digit_row(a[i]).shl1;

        out[i] = if carry {
            pair_row(shifted, Digit::truncate(1)).or
        } else {
            shifted
        };
        carry = overflow;
    }

    out
}

impl Word {
    /// Wrapping addition modulo the word range.
    ///
    /// The result takes the promoted cast of the two operands. Fails only
    /// on mismatched widths.
    pub fn add(&self, rhs: &Word) -> Result<Word> {
        self.check_width("add", rhs)?;

        let (sign, radix) = arith_hint(self, rhs);

        Ok(Word::from_digits(
            add_digits(self.digits(), rhs.digits()),
            sign,
            radix,
        ))
    }

    /// Wrapping subtraction modulo the word range.
    pub fn sub(&self, rhs: &Word) -> Result<Word> {
        self.check_width("sub", rhs)?;

        let (sign, radix) = arith_hint(self, rhs);

        Ok(Word::from_digits(
            sub_digits(self.digits(), rhs.digits()),
            sign,
            radix,
        ))
    }

    /// Per-digit bitwise AND. The result keeps this word's casts.
    pub fn band(&self, rhs: &Word) -> Result<Word> {
        self.check_width("band", rhs)?;

        let digits = self
            .digits()
            .iter()
            .zip(rhs.digits())
            .map(|(a, b)| pair_row(*a, *b).and)
            .collect();

        Ok(Word::from_digits(digits, self.sign(), self.radix()))
    }

    /// Per-digit bitwise OR. The result keeps this word's casts.
    pub fn bor(&self, rhs: &Word) -> Result<Word> {
        self.check_width("bor", rhs)?;

        let digits = self
            .digits()
            .iter()
            .zip(rhs.digits())
            .map(|(a, b)| pair_row(*a, *b).or)
            .collect();

        Ok(Word::from_digits(digits, self.sign(), self.radix()))
    }

    /// Per-digit bitwise XOR. The result keeps this word's casts.
    pub fn bxor(&self, rhs: &Word) -> Result<Word> {
        self.check_width("bxor", rhs)?;

        let digits = self
            .digits()
            .iter()
            .zip(rhs.digits())
            .map(|(a, b)| pair_row(*a, *b).xor)
            .collect();

        Ok(Word::from_digits(digits, self.sign(), self.radix()))
    }

    /// Per-digit bitwise complement.
    pub fn bnot(&self) -> Word {
        Word::from_digits(not_digits(self.digits()), self.sign(), self.radix())
    }

    /// Wrapping increment.
    pub fn inc(&self) -> Word {
        Word::from_digits(inc_digits(self.digits()), self.sign(), self.radix())
    }

    /// Wrapping decrement.
    pub fn dec(&self) -> Word {
        Word::from_digits(dec_digits(self.digits()), self.sign(), self.radix())
    }
}
