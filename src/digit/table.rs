//! Per-digit trait table

use crate::digit::Digit;

/// Precomputed traits of a single hex digit.
///
/// One row per digit value, mirroring the layout of the generated digit
/// trait rows: not, (dec carry, dec), (inc carry, inc), shift results, and
/// the binary expansion.
#[derive(Copy, Clone, Debug)]
pub struct DigitRow {
    /// Bitwise complement within the nybble.
    pub not: Digit,

    /// Decrement: borrow flag and result. Borrows exactly at zero.
    pub dec: (bool, Digit),

    /// Increment: carry flag and result. Carries exactly at fifteen.
    pub inc: (bool, Digit),

    /// Left shift by one: overflow bit and result nybble.
    pub shl1: (bool, Digit),

    /// Right shift by one: the bit shifted out and the result nybble.
    pub shr1: (bool, Digit),

    /// 4-bit binary expansion, most significant bit first.
    pub bits: [bool; 4],
}

fn build_row(v: u8) -> DigitRow {
    let shl = v << 1;

    DigitRow {
        not: Digit::truncate(!v),
        dec: (v == 0, Digit::truncate(v.wrapping_sub(1))),
        inc: (v == 0xF, Digit::truncate(v.wrapping_add(1))),
        shl1: (shl >> 4 != 0, Digit::truncate(shl)),
        shr1: (v & 1 != 0, Digit::truncate(v >> 1)),
        bits: [v & 8 != 0, v & 4 != 0, v & 2 != 0, v & 1 != 0],
    }
}

lazy_static! {
    static ref DIGIT_TABLE: [DigitRow; 16] = {
        let mut table = [build_row(0); 16];

        for (v, row) in table.iter_mut().enumerate().skip(1) {
            *row = build_row(v as u8);
        }

        table
    };
}

/// Look up the trait row for a digit.
pub fn digit_row(d: Digit) -> &'static DigitRow {
    &DIGIT_TABLE[d.value() as usize]
}
