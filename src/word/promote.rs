//! Cast promotion for two-operand arithmetic.

use crate::word::{Radix, Sign, Word};

/// The cast a two-operand arithmetic result takes: unsigned if either
/// operand is unsigned, decimal if either operand is decimal, hex
/// otherwise.
///
/// Bitwise, shift and rotate operations do not use this; they keep the left
/// operand's casts unchanged.
pub(super) fn arith_hint(a: &Word, b: &Word) -> (Sign, Radix) {
    let sign = if a.sign() == Sign::Unsigned || b.sign() == Sign::Unsigned {
        Sign::Unsigned
    } else {
        Sign::Signed
    };

    let radix = if a.radix() == Radix::Dec || b.radix() == Radix::Dec {
        Radix::Dec
    } else {
        Radix::Hex
    };

    (sign, radix)
}
