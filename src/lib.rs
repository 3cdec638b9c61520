//! Fixed-width word arithmetic and bitwise operations, driven entirely by
//! nybble lookup tables.
//!
//! hexmill models integers as sequences of hex digits rather than machine
//! words. Every arithmetic and bitwise operation is composed from two small
//! constant tables: a 16-entry digit trait table and a 256-entry digit-pair
//! trait table. Multi-digit operations chain the per-digit results together,
//! threading a carry or borrow from the least significant digit upward.
//!
//! The word width is configurable in nybbles and fixed per [`Config`]. All
//! arithmetic wraps modulo `2^(4 * word_size)`; logical shifts past the bit
//! length saturate to zero. Signedness is a two's-complement interpretation
//! of the top bit, carried alongside each word as a cast tag.

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_plain;

pub mod cli;
pub mod config;
pub mod digit;
pub mod error;
pub mod facts;
pub mod index;
pub mod word;

pub use config::Config;
pub use digit::Digit;
pub use error::{Error, Result};
pub use word::{Popcount, Radix, Sign, Word};
