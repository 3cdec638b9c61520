//! Translation of signed offsets into absolute range offsets

use crate::error::{Error, Result};

/// Translate a possibly-negative offset to a zero-based offset against a
/// range of `size` items.
///
/// Non-negative offsets pass through unchanged and may equal `size`, the
/// one-past-the-end position used for insertion. Negative offsets count
/// back from the end, so `-1` is the last item. Anything outside
/// `[-size, size]` fails.
pub fn translate(op: &'static str, ofs: i128, size: usize) -> Result<usize> {
    if ofs >= 0 {
        if ofs <= size as i128 {
            Ok(ofs as usize)
        } else {
            Err(Error::IndexOutOfRange {
                op,
                index: ofs,
                size,
            })
        }
    } else if -ofs <= size as i128 {
        Ok((size as i128 + ofs) as usize)
    } else {
        Err(Error::IndexOutOfRange {
            op,
            index: ofs,
            size,
        })
    }
}
