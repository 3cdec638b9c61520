//! Multiplication, division, and negation.
//!
//! Neither operation has a lookup table of its own. Multiplication is
//! binary double-and-add: test each multiplier bit, conditionally
//! accumulate, and double the addend with a shift chain. Division is
//! binary long division: feed dividend bits into the remainder from the
//! top, subtracting the divisor whenever it fits and recording a quotient
//! bit. Both are bounded by the bit length.

use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::word::bits::{dump_digits, load_bits};
use crate::word::chain::{add_digits, neg_digits, shl1_digits, sub_digits};
use crate::word::cmp::lt_digits;
use crate::word::promote::arith_hint;
use crate::word::Word;

impl Word {
    /// Wrapping multiplication modulo the word range.
    pub fn mul(&self, rhs: &Word) -> Result<Word> {
        self.check_width("mul", rhs)?;

        let (sign, radix) = arith_hint(self, rhs);
        let mut acc = vec![Digit::truncate(0); self.width()];
        let mut addend = self.digits().to_vec();

        for bit in rhs.bit_dump().iter().rev() {
            if *bit {
                acc = add_digits(&acc, &addend);
            }

            addend = shl1_digits(&addend, false);
        }

        Ok(Word::from_digits(acc, sign, radix))
    }

    /// Truncated division with remainder.
    ///
    /// The quotient is negative when exactly one operand is negative; the
    /// remainder takes the dividend's sign. Fails on a zero divisor.
    pub fn divr(&self, rhs: &Word) -> Result<(Word, Word)> {
        self.check_width("divr", rhs)?;

        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                op: "divr",
                dividend: self.to_string(),
            });
        }

        let (sign, radix) = arith_hint(self, rhs);
        let a_neg = self.is_negative();
        let b_neg = rhs.is_negative();

        let a_mag = if a_neg {
            neg_digits(self.digits())
        } else {
            self.digits().to_vec()
        };
        let b_mag = if b_neg {
            neg_digits(rhs.digits())
        } else {
            rhs.digits().to_vec()
        };

        let mut rem = vec![Digit::truncate(0); self.width()];
        let mut q_bits = Vec::with_capacity(self.bit_length());

        for bit in dump_digits(&a_mag) {
            rem = shl1_digits(&rem, bit);

            if lt_digits(&rem, &b_mag) {
                q_bits.push(false);
            } else {
                rem = sub_digits(&rem, &b_mag);
                q_bits.push(true);
            }
        }

        let mut quot = load_bits(&q_bits);

        if a_neg != b_neg {
            quot = neg_digits(&quot);
        }

        if a_neg {
            rem = neg_digits(&rem);
        }

        Ok((
            Word::from_digits(quot, sign, radix),
            Word::from_digits(rem, sign, radix),
        ))
    }

    /// Truncated division quotient.
    pub fn div(&self, rhs: &Word) -> Result<Word> {
        Ok(self.divr(rhs)?.0)
    }

    /// Truncated division remainder.
    pub fn rem(&self, rhs: &Word) -> Result<Word> {
        Ok(self.divr(rhs)?.1)
    }

    /// Two's-complement negation, keeping this word's casts.
    pub fn neg(&self) -> Word {
        Word::from_digits(neg_digits(self.digits()), self.sign(), self.radix())
    }

    /// Absolute value. Words that do not read as negative pass through,
    /// so this is the identity for every unsigned word.
    pub fn abs(&self) -> Word {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }
}
