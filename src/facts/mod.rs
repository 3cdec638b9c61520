//! Per-value numeric fact rows and the cache that memoizes them.
//!
//! Every representable unsigned value has a row of precomputed facts: its
//! literal forms, sign interpretation, log2, integer square root, and
//! prime factorization. The scalar queries that would otherwise cost
//! `O(log n)` or `O(sqrt n)` per call become a single cache hit. Rows are
//! computed on first request behind an `RwLock`; small words can also be
//! enumerated eagerly in parallel.

use crate::digit::SYMBOLS;
use num::integer::Roots;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Precomputed facts about one unsigned value of a fixed width.
///
/// The string fields are literal renderings in the same shape the word
/// type displays: decimal forms carry a `u` suffix when unsigned, hex
/// forms are `0x` followed by one symbol per nybble.
#[derive(Clone, Debug, Serialize)]
pub struct Facts {
    pub value: u128,

    /// Hex literal form, one digit per configured nybble.
    pub hex: String,

    /// Hex literal form of the bitwise complement.
    pub bitnot: String,

    /// Unsigned decimal literal form.
    pub udec: String,

    /// Signed decimal literal form under two's complement.
    pub idec: String,

    /// Whether the top bit reads as a sign bit.
    pub is_negative: bool,

    /// Floor of log2. None for zero, which has no logarithm.
    pub log2: Option<u32>,

    /// Integer square root.
    pub sqrt: u128,

    /// Prime factorization in ascending order; empty for zero and one.
    pub factors: Vec<u128>,
}

fn hex_literal(value: u128, word_size: usize) -> String {
    let mut s = String::with_capacity(word_size + 2);

    s.push_str("0x");

    for i in (0..word_size).rev() {
        s.push(SYMBOLS[(value >> (i * 4)) as usize & 0xF]);
    }

    s
}

fn prime_factors(mut n: u128) -> Vec<u128> {
    let mut out = Vec::new();

    if n < 2 {
        return out;
    }

    let mut p = 2;

    while p * p <= n {
        while n % p == 0 {
            out.push(p);
            n /= p;
        }

        p += if p == 2 { 1 } else { 2 };
    }

    if n > 1 {
        out.push(n);
    }

    out
}

/// Compute the fact row for one value. `value` must already be within the
/// word range.
pub fn compute(value: u128, word_size: usize) -> Facts {
    let bit_length = word_size * 4;
    let mask = if bit_length == 128 {
        u128::max_value()
    } else {
        (1u128 << bit_length) - 1
    };
    let int_max = mask >> 1;
    let is_negative = value > int_max;
    let signed = if is_negative {
        value as i128 - 1 - mask as i128
    } else {
        value as i128
    };

    Facts {
        value,
        hex: hex_literal(value, word_size),
        bitnot: hex_literal(!value & mask, word_size),
        udec: format!("{}u", value),
        idec: format!("{}", signed),
        is_negative,
        log2: if value == 0 {
            None
        } else {
            Some(127 - value.leading_zeros())
        },
        sqrt: value.sqrt(),
        factors: prime_factors(value),
    }
}

/// Memoizing store of fact rows for one word width.
#[derive(Debug, Default)]
pub struct FactsCache {
    rows: RwLock<HashMap<u128, Arc<Facts>>>,
}

impl FactsCache {
    pub fn new() -> Self {
        FactsCache {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the row for a value, computing and caching it on first use.
    ///
    /// Lock poisoning cannot happen short of a panic inside the table
    /// build, so the lock results are treated as infallible.
    pub fn row(&self, value: u128, word_size: usize) -> Arc<Facts> {
        if let Some(row) = self.rows.read().expect("facts lock").get(&value) {
            return Arc::clone(row);
        }

        let row = Arc::new(compute(value, word_size));
        let mut rows = self.rows.write().expect("facts lock");

        Arc::clone(rows.entry(value).or_insert(row))
    }

    /// Eagerly compute every row from zero through `max` in parallel and
    /// merge them into the cache. Returns the number of rows stored.
    pub fn populate(&self, max: u128, word_size: usize) -> usize {
        let computed: Vec<(u128, Arc<Facts>)> = (0..=max as u64)
            .into_par_iter()
            .map(|n| (u128::from(n), Arc::new(compute(u128::from(n), word_size))))
            .collect();

        let mut rows = self.rows.write().expect("facts lock");

        for (n, row) in computed {
            rows.entry(n).or_insert(row);
        }

        rows.len()
    }

    /// Number of rows currently cached.
    pub fn len(&self) -> usize {
        self.rows.read().expect("facts lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
