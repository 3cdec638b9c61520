//! Bit-level decomposition, shifts, rotations, and single-bit access.
//!
//! Shifts and rotations work on the bit dump of a word: the digit sequence
//! expanded, through the digit table, into its individual bits. The dump is
//! repositioned and regrouped four bits at a time back into digits. Single
//! bit offsets count from the least significant bit and may be negative,
//! resolving through the index translator, so `-1` always addresses the
//! sign bit.

use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::index;
use crate::word::Word;

/// Expand a digit sequence into individual bits, most significant first.
pub(super) fn dump_digits(ds: &[Digit]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(ds.len() * 4);

    for d in ds {
        bits.extend_from_slice(&d.bits());
    }

    bits
}

/// Regroup a bit dump, four bits per digit, most significant first.
pub(super) fn load_bits(bits: &[bool]) -> Vec<Digit> {
    bits.chunks(4)
        .map(|c| Digit::from_bits([c[0], c[1], c[2], c[3]]))
        .collect()
}

impl Word {
    /// Expand into individual bits, most significant first.
    pub fn bit_dump(&self) -> Vec<bool> {
        dump_digits(self.digits())
    }

    /// Regroup a bit dump into a word carrying this word's casts.
    ///
    /// The dump length must match the bit length; this is an internal
    /// invariant of the shift engine rather than a user-facing failure.
    fn bit_load(&self, bits: &[bool]) -> Word {
        debug_assert_eq!(bits.len(), self.bit_length());

        Word::from_digits(load_bits(bits), self.sign(), self.radix())
    }

    /// Logical left shift. Vacated positions fill with zero; shifting by
    /// the bit length or more yields zero.
    pub fn shl(&self, n: usize) -> Word {
        let len = self.bit_length();

        if n >= len {
            return self.bit_load(&vec![false; len]);
        }

        let mut bits = self.bit_dump();

        bits.drain(..n);
        bits.resize(len, false);

        self.bit_load(&bits)
    }

    /// Logical right shift. Vacated positions fill with zero; shifting by
    /// the bit length or more yields zero.
    pub fn shr(&self, n: usize) -> Word {
        let len = self.bit_length();

        if n >= len {
            return self.bit_load(&vec![false; len]);
        }

        let dump = self.bit_dump();
        let mut bits = vec![false; n];

        bits.extend_from_slice(&dump[..len - n]);

        self.bit_load(&bits)
    }

    /// Arithmetic right shift: vacated positions take the original top
    /// bit, preserving the two's-complement sign. Shifting by the bit
    /// length or more leaves nothing but copies of the sign bit.
    pub fn sar(&self, n: usize) -> Word {
        let len = self.bit_length();
        let dump = self.bit_dump();
        let fill = dump[0];

        if n >= len {
            return self.bit_load(&vec![fill; len]);
        }

        let mut bits = vec![fill; n];

        bits.extend_from_slice(&dump[..len - n]);

        self.bit_load(&bits)
    }

    /// Rotate left. The count is taken modulo the bit length.
    pub fn rotl(&self, n: usize) -> Word {
        let mut bits = self.bit_dump();
        let n = n % bits.len();

        bits.rotate_left(n);

        self.bit_load(&bits)
    }

    /// Rotate right. The count is taken modulo the bit length.
    pub fn rotr(&self, n: usize) -> Word {
        let mut bits = self.bit_dump();
        let n = n % bits.len();

        bits.rotate_right(n);

        self.bit_load(&bits)
    }

    /// Resolve a signed bit offset to an absolute LSB-based offset.
    ///
    /// One-past-the-end is meaningful to the index translator but not to a
    /// bit access, so it is rejected here along with everything the
    /// translator rejects.
    fn resolve_bit(&self, op: &'static str, i: i128) -> Result<usize> {
        let bits = self.bit_length();

        match index::translate(op, i, bits) {
            Ok(ofs) if ofs < bits => Ok(ofs),
            _ => Err(Error::BitIndexOutOfRange {
                op,
                index: i,
                bits,
            }),
        }
    }

    /// Read the bit at offset `i` from the least significant end.
    pub fn bit_get(&self, i: i128) -> Result<bool> {
        let ofs = self.resolve_bit("bit_get", i)?;
        let bits = self.bit_dump();

        Ok(bits[bits.len() - 1 - ofs])
    }

    /// Set the bit at offset `i` from the least significant end.
    pub fn bit_set(&self, i: i128, bit: bool) -> Result<Word> {
        let ofs = self.resolve_bit("bit_set", i)?;
        let mut bits = self.bit_dump();
        let pos = bits.len() - 1 - ofs;

        bits[pos] = bit;

        Ok(self.bit_load(&bits))
    }

    /// Flip the bit at offset `i` from the least significant end.
    pub fn bit_flip(&self, i: i128) -> Result<Word> {
        let ofs = self.resolve_bit("bit_flip", i)?;
        let mut bits = self.bit_dump();
        let pos = bits.len() - 1 - ofs;

        bits[pos] = !bits[pos];

        Ok(self.bit_load(&bits))
    }
}

/// Count the number of symbols in a bitwise value.
pub trait Popcount {
    /// The resulting output of a successful population count.
    type Output;

    /// Count the number of one symbols in the binary representation.
    fn pop_count(self) -> Self::Output;

    /// Count the number of zero symbols in the binary representation.
    fn depop_count(self) -> Self::Output;
}

impl Popcount for &Word {
    type Output = u32;

    fn pop_count(self) -> u32 {
        self.bit_dump().iter().filter(|b| **b).count() as u32
    }

    fn depop_count(self) -> u32 {
        self.bit_length() as u32 - self.pop_count()
    }
}
