//! Digit-pair trait table

use crate::digit::Digit;

/// Precomputed traits of an ordered pair of hex digits.
///
/// One row per pair, with subtraction and addition stored once per carry-in
/// value so a chained multi-digit operation resolves each position with a
/// single lookup: lt, and, or, xor, sub0-1, add0-1.
#[derive(Copy, Clone, Debug)]
pub struct PairRow {
    /// Whether the first digit is strictly less than the second.
    pub lt: bool,

    pub and: Digit,
    pub or: Digit,
    pub xor: Digit,

    /// Subtraction, indexed by borrow-in: (borrow out, result).
    pub sub: [(bool, Digit); 2],

    /// Addition, indexed by carry-in: (carry out, result).
    pub add: [(bool, Digit); 2],
}

fn sub_entry(a: u16, b: u16, borrow: u16) -> (bool, Digit) {
    let raw = 16 + a - b - borrow;

    (raw < 16, Digit::truncate((raw % 16) as u8))
}

fn add_entry(a: u16, b: u16, carry: u16) -> (bool, Digit) {
    let raw = a + b + carry;

    (raw >= 16, Digit::truncate((raw % 16) as u8))
}

fn build_row(a: u16, b: u16) -> PairRow {
    PairRow {
        lt: a < b,
        and: Digit::truncate((a & b) as u8),
        or: Digit::truncate((a | b) as u8),
        xor: Digit::truncate((a ^ b) as u8),
        sub: [sub_entry(a, b, 0), sub_entry(a, b, 1)],
        add: [add_entry(a, b, 0), add_entry(a, b, 1)],
    }
}

lazy_static! {
    static ref PAIR_TABLE: [PairRow; 256] = {
        let mut table = [build_row(0, 0); 256];

        for (idx, row) in table.iter_mut().enumerate().skip(1) {
            *row = build_row(idx as u16 >> 4, idx as u16 & 0xF);
        }

        table
    };
}

/// Look up the trait row for an ordered pair of digits.
pub fn pair_row(a: Digit, b: Digit) -> &'static PairRow {
    &PAIR_TABLE[((a.value() as usize) << 4) | b.value() as usize]
}
