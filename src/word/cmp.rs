//! Value comparison across sign interpretations.

use crate::digit::{pair_row, Digit};
use crate::error::Result;
use crate::word::Word;
use std::cmp::Ordering;

/// Unsigned digit-sequence comparison, most significant digit first.
pub(super) fn lt_digits(a: &[Digit], b: &[Digit]) -> bool {
    for (x, y) in a.iter().zip(b) {
        if x != y {
            return pair_row(*x, *y).lt;
        }
    }

    false
}

impl Word {
    /// Compare two words as the integers their own casts say they are.
    ///
    /// Each operand is read under its own signedness, so a negative signed
    /// word orders below any unsigned word with the same digits. Words of
    /// the same negativity compare digit by digit from the most
    /// significant end, which is exactly two's-complement order within a
    /// sign class.
    pub fn compare(&self, rhs: &Word) -> Result<Ordering> {
        self.check_width("compare", rhs)?;

        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => return Ok(Ordering::Less),
            (false, true) => return Ok(Ordering::Greater),
            _ => {}
        }

        for (a, b) in self.digits().iter().zip(rhs.digits()) {
            if a != b {
                return Ok(if pair_row(*a, *b).lt {
                    Ordering::Less
                } else {
                    Ordering::Greater
                });
            }
        }

        Ok(Ordering::Equal)
    }

    /// The smaller of two words by `compare`; ties keep the left operand.
    pub fn min_word(&self, rhs: &Word) -> Result<Word> {
        Ok(match self.compare(rhs)? {
            Ordering::Greater => rhs.clone(),
            _ => self.clone(),
        })
    }

    /// The larger of two words by `compare`; ties keep the left operand.
    pub fn max_word(&self, rhs: &Word) -> Result<Word> {
        Ok(match self.compare(rhs)? {
            Ordering::Less => rhs.clone(),
            _ => self.clone(),
        })
    }

    pub fn eqz(&self) -> bool {
        self.is_zero()
    }

    pub fn nez(&self) -> bool {
        !self.is_zero()
    }

    /// Less than zero: only a signed word with its top bit set.
    pub fn ltz(&self) -> bool {
        self.is_negative()
    }

    pub fn gtz(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    pub fn gez(&self) -> bool {
        !self.is_negative()
    }

    pub fn lez(&self) -> bool {
        self.is_negative() || self.is_zero()
    }
}
