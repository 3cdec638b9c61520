//! The fixed-width word type and the operations defined over it.
//!
//! A `Word` is a fixed-length sequence of hex digits plus two cast tags: a
//! signedness and a preferred radix. The digits are authoritative; the
//! signed interpretation of a word is always derived from its top bit under
//! two's complement, never stored. Operations never mutate a word in place,
//! they build a new one by chaining trait-table lookups across the digit
//! sequence.

mod arith;
mod bits;
mod chain;
mod cmp;
mod promote;

pub use bits::Popcount;

use crate::digit::Digit;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str;

/// Signedness cast tag.
///
/// This tags how a word prefers to be read, not what it stores: the sign
/// bit lives in the digits. An unsigned word with its top bit set is a
/// large positive number; the same digits under `Signed` are negative.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Serialize, Debug)]
pub enum Sign {
    Signed,
    Unsigned,
}

/// Preferred display radix cast tag.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Serialize, Debug)]
pub enum Radix {
    Dec,
    Hex,
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Signed => write!(f, "signed"),
            Sign::Unsigned => write!(f, "unsigned"),
        }
    }
}

impl str::FromStr for Sign {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "signed" => Ok(Sign::Signed),
            "int" => Ok(Sign::Signed),
            "unsigned" => Ok(Sign::Unsigned),
            "uint" => Ok(Sign::Unsigned),
            _ => Err(()),
        }
    }
}

derive_deserialize_from_str!(Sign, "valid signedness");

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Dec => write!(f, "decimal"),
            Radix::Hex => write!(f, "hexadecimal"),
        }
    }
}

impl str::FromStr for Radix {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "decimal" => Ok(Radix::Dec),
            "dec" => Ok(Radix::Dec),
            "hexadecimal" => Ok(Radix::Hex),
            "hex" => Ok(Radix::Hex),
            _ => Err(()),
        }
    }
}

derive_deserialize_from_str!(Radix, "valid radix");

/// A fixed-width integer as a digit sequence.
///
/// The digit sequence always holds exactly one digit per configured nybble,
/// most significant first. Equality is structural: two words are equal when
/// their digits and both cast tags match.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Word {
    digits: Vec<Digit>,
    sign: Sign,
    radix: Radix,
}

impl Word {
    /// Assemble a word from an unsigned value known to fit the width.
    pub(crate) fn from_value(value: u128, width: usize, sign: Sign, radix: Radix) -> Self {
        let mut digits = Vec::with_capacity(width);

        for i in (0..width).rev() {
            digits.push(Digit::truncate((value >> (i * 4)) as u8));
        }

        Word {
            digits,
            sign,
            radix,
        }
    }

    pub(crate) fn from_digits(digits: Vec<Digit>, sign: Sign, radix: Radix) -> Self {
        Word {
            digits,
            sign,
            radix,
        }
    }

    /// The digit sequence, most significant digit first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Width in nybbles.
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Width in bits.
    pub fn bit_length(&self) -> usize {
        self.digits.len() * 4
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Recast the word's signedness without touching its digits.
    pub fn cast_sign(&self, sign: Sign) -> Word {
        Word {
            digits: self.digits.clone(),
            sign,
            radix: self.radix,
        }
    }

    /// Recast the word's display radix without touching its digits.
    pub fn cast_radix(&self, radix: Radix) -> Word {
        Word {
            digits: self.digits.clone(),
            sign: self.sign,
            radix,
        }
    }

    /// Whether this word reads as negative: signed, with the top bit set.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Signed && self.digits[0].high_bit()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.value() == 0)
    }

    /// The raw unsigned value of the digit sequence.
    pub fn value(&self) -> u128 {
        self.digits
            .iter()
            .fold(0, |acc, d| (acc << 4) | u128::from(d.value()))
    }

    /// The value under this word's own signedness tag.
    pub fn signed_value(&self) -> i128 {
        if self.is_negative() {
            self.value() as i128 - (1i128 << self.bit_length())
        } else {
            self.value() as i128
        }
    }

    /// Render as a hex literal, `0x` followed by every digit.
    pub fn to_hex_string(&self) -> String {
        let mut s = String::with_capacity(self.width() + 2);

        s.push_str("0x");

        for d in &self.digits {
            s.push(d.symbol());
        }

        s
    }

    /// Render as a decimal literal under this word's signedness.
    pub fn to_decimal_string(&self) -> String {
        match self.sign {
            Sign::Unsigned => format!("{}", self.value()),
            Sign::Signed => format!("{}", self.signed_value()),
        }
    }

    pub(crate) fn check_width(&self, op: &'static str, rhs: &Word) -> Result<()> {
        if self.width() == rhs.width() {
            Ok(())
        } else {
            Err(Error::Domain {
                op,
                detail: format!(
                    "word widths differ ({} vs {} nybbles)",
                    self.width(),
                    rhs.width()
                ),
            })
        }
    }
}

impl Display for Word {
    /// Renders in literal form: decimal words as their value with a `u`
    /// suffix when unsigned, hex words as `0x` digits with the same suffix
    /// rule.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.radix, self.sign) {
            (Radix::Dec, Sign::Unsigned) => write!(f, "{}u", self.value()),
            (Radix::Dec, Sign::Signed) => write!(f, "{}", self.signed_value()),
            (Radix::Hex, Sign::Unsigned) => write!(f, "{}u", self.to_hex_string()),
            (Radix::Hex, Sign::Signed) => write!(f, "{}", self.to_hex_string()),
        }
    }
}

derive_serialize_from_display!(Word);

#[cfg(test)]
mod tests;
