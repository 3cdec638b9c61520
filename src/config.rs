//! Word-width configuration and word construction.

use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::facts::{Facts, FactsCache};
use crate::word::{Radix, Sign, Word};
use std::sync::Arc;

/// The largest bit length whose facts table may be enumerated eagerly.
const EAGER_FACTS_LIMIT: usize = 20;

/// A fixed word width and everything derived from it.
///
/// The width is supplied once, in nybbles, and never changes afterward;
/// every word built through a config carries exactly this many digits.
/// The config also owns the memoized facts table for its width.
///
/// Host-side bounds checks and the facts table use 128-bit arithmetic, so
/// the width is capped at 31 nybbles. Wider words would need the
/// arbitrary-precision arithmetic this crate deliberately does not do.
#[derive(Debug)]
pub struct Config {
    word_size: usize,
    facts: FactsCache,
}

impl Config {
    /// Fix the word size in nybbles.
    pub fn new(word_size: usize) -> Result<Config> {
        if word_size == 0 || word_size > 31 {
            return Err(Error::Domain {
                op: "config",
                detail: format!("word size {} is not within 1..=31 nybbles", word_size),
            });
        }

        Ok(Config {
            word_size,
            facts: FactsCache::new(),
        })
    }

    /// Word size in nybbles.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Word size in bits.
    pub fn bit_length(&self) -> usize {
        self.word_size * 4
    }

    /// The largest representable unsigned value.
    pub fn uint_max(&self) -> u128 {
        (1u128 << self.bit_length()) - 1
    }

    /// The largest representable signed value.
    pub fn int_max(&self) -> u128 {
        self.uint_max() >> 1
    }

    /// The smallest representable signed value.
    pub fn int_min(&self) -> i128 {
        -1 - self.int_max() as i128
    }

    /// An unsigned decimal word from a raw value.
    pub fn uword(&self, n: u128) -> Result<Word> {
        if n > self.uint_max() {
            return Err(Error::Domain {
                op: "uword",
                detail: format!("{} exceeds the unsigned maximum {}", n, self.uint_max()),
            });
        }

        Ok(Word::from_value(
            n,
            self.word_size,
            Sign::Unsigned,
            Radix::Dec,
        ))
    }

    /// A signed decimal word from a raw value, negative values taking
    /// their two's-complement digit form.
    pub fn iword(&self, n: i128) -> Result<Word> {
        if n > self.int_max() as i128 || n < self.int_min() {
            return Err(Error::Domain {
                op: "iword",
                detail: format!(
                    "{} is outside the signed range {}..={}",
                    n,
                    self.int_min(),
                    self.int_max()
                ),
            });
        }

        let raw = if n < 0 {
            (n + self.uint_max() as i128 + 1) as u128
        } else {
            n as u128
        };

        Ok(Word::from_value(raw, self.word_size, Sign::Signed, Radix::Dec))
    }

    /// A word assembled directly from digits.
    pub fn word_from_digits(&self, digits: Vec<Digit>, sign: Sign, radix: Radix) -> Result<Word> {
        if digits.len() != self.word_size {
            return Err(Error::Domain {
                op: "word_from_digits",
                detail: format!(
                    "{} digits supplied for a {}-nybble word",
                    digits.len(),
                    self.word_size
                ),
            });
        }

        Ok(Word::from_digits(digits, sign, radix))
    }

    /// Parse a word literal.
    ///
    /// The literal grammar follows the display forms: `255u` is unsigned
    /// decimal, `127` and `-1` are signed decimal, `0xFF` is signed hex,
    /// `0xFFu` is unsigned hex. Hex literals must spell out every digit of
    /// the configured width. Signed decimal literals without a sign must
    /// fit the signed maximum; spelling larger values requires the `u`
    /// suffix or hex form.
    pub fn parse_word(&self, s: &str) -> Result<Word> {
        let fail = |detail: String| Error::Domain {
            op: "parse_word",
            detail,
        };

        let (body, unsigned) = match s.strip_suffix('u') {
            Some(body) => (body, true),
            None => (s, false),
        };

        if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            if hex.len() != self.word_size {
                return Err(fail(format!(
                    "{} has {} hex digits, expected {}",
                    s,
                    hex.len(),
                    self.word_size
                )));
            }

            let mut digits = Vec::with_capacity(self.word_size);

            for c in hex.chars() {
                digits.push(Digit::from_symbol(c).ok_or_else(|| {
                    fail(format!("{} is not a hex digit in {}", c, s))
                })?);
            }

            let sign = if unsigned { Sign::Unsigned } else { Sign::Signed };

            return Ok(Word::from_digits(digits, sign, Radix::Hex));
        }

        if unsigned {
            let n: u128 = body
                .parse()
                .map_err(|_| fail(format!("{} is not an unsigned literal", s)))?;

            self.uword(n)
        } else {
            let n: i128 = body
                .parse()
                .map_err(|_| fail(format!("{} is not an integer literal", s)))?;

            self.iword(n)
        }
    }

    /// The fact row for an unsigned value.
    pub fn facts(&self, n: u128) -> Result<Arc<Facts>> {
        if n > self.uint_max() {
            return Err(Error::Domain {
                op: "facts",
                detail: format!("{} exceeds the unsigned maximum {}", n, self.uint_max()),
            });
        }

        Ok(self.facts.row(n, self.word_size))
    }

    /// Eagerly compute the full facts table in parallel.
    ///
    /// Only sensible for narrow words; wider configurations must rely on
    /// the lazy cache instead. Returns the number of rows held.
    pub fn build_facts_table(&self) -> Result<usize> {
        if self.bit_length() > EAGER_FACTS_LIMIT {
            return Err(Error::Domain {
                op: "build_facts_table",
                detail: format!(
                    "{}-bit words have too many values to enumerate eagerly",
                    self.bit_length()
                ),
            });
        }

        Ok(self.facts.populate(self.uint_max(), self.word_size))
    }

    /// Floor of log2 as an unsigned decimal word, from the facts table.
    ///
    /// The operand's digits are read as an unsigned value. Zero has no
    /// logarithm and fails.
    pub fn log2(&self, w: &Word) -> Result<Word> {
        let row = self.facts(w.value())?;

        match row.log2 {
            Some(l) => self.uword(u128::from(l)),
            None => Err(Error::Domain {
                op: "log2",
                detail: format!("log2 of zero is undefined ({})", w),
            }),
        }
    }

    /// Integer square root as an unsigned decimal word, from the facts
    /// table. The operand's digits are read as an unsigned value.
    pub fn sqrt(&self, w: &Word) -> Result<Word> {
        let row = self.facts(w.value())?;

        self.uword(row.sqrt)
    }

    /// Prime factorization as unsigned decimal words, from the facts
    /// table. Empty for zero and one.
    pub fn factors(&self, w: &Word) -> Result<Vec<Word>> {
        let row = self.facts(w.value())?;

        row.factors.iter().map(|f| self.uword(*f)).collect()
    }
}
