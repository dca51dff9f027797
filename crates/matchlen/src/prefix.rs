//! Common prefix length primitives for LZ algorithms.
//!
//! These functions find how many leading bytes two slices share, which is
//! the core measurement of LZ77-style match finding. The scanner compares
//! 8-byte words and always reads them little-endian, so results do not
//! depend on host byte order.

use matchlen_core::{Error, Result};

/// Width of one comparison chunk in bytes.
const CHUNK: usize = 8;

/// Return the length of the longest common prefix of `a` and `b`.
///
/// By convention `a` is the shorter of the two. This is not checked: when
/// `a` is longer, the result is bounded by `b` instead. See
/// [`checked_match_len`] for a variant that enforces the ordering.
///
/// # Example
///
/// ```
/// use matchlen::match_len;
///
/// assert_eq!(match_len(b"abcdefghi", b"abcdefghX"), 8);
/// assert_eq!(match_len(b"", b"abc"), 0);
/// ```
#[inline]
pub fn match_len(a: &[u8], b: &[u8]) -> usize {
    let mut n = 0;

    for (wa, wb) in a.chunks_exact(CHUNK).zip(b.chunks_exact(CHUNK)) {
        let diff = load_le(wa) ^ load_le(wb);
        if diff != 0 {
            return n + (diff.trailing_zeros() / 8) as usize;
        }
        n += CHUNK;
    }

    n + a[n..]
        .iter()
        .zip(&b[n..])
        .take_while(|(x, y)| x == y)
        .count()
}

/// Like [`match_len`], but scan at most `max_len` bytes.
#[inline]
pub fn match_len_limited(a: &[u8], b: &[u8], max_len: usize) -> usize {
    let len = a.len().min(b.len()).min(max_len);
    match_len(&a[..len], &b[..len])
}

/// Like [`match_len`], but reject a first slice longer than the second.
pub fn checked_match_len(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() > b.len() {
        return Err(Error::length_order(a.len(), b.len()));
    }
    Ok(match_len(a, b))
}

/// Byte-at-a-time reference with the same contract as [`match_len`].
///
/// Slower, but trivially correct.
#[inline]
pub fn match_len_bytewise(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

#[inline(always)]
fn load_le(chunk: &[u8]) -> u64 {
    let mut word = [0u8; CHUNK];
    word.copy_from_slice(chunk);
    u64::from_le_bytes(word)
}
