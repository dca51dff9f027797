//! Window-relative match measurement.
//!
//! Match finders usually hold one buffer and compare two positions inside
//! it: the current position and an earlier candidate. The helpers here
//! translate those positions into slices for [`match_len`].

use matchlen_core::{Error, Result};

use crate::prefix::match_len;

/// Forward match length between `data[candidate..]` and `data[position..]`.
///
/// The length is capped at `max_len` and at the bytes left after the later
/// of the two positions. Returns 0 if either index is outside `data`.
/// The two regions may overlap, which is how LZ77 encodes runs.
#[inline]
pub fn match_len_at(data: &[u8], candidate: usize, position: usize, max_len: usize) -> usize {
    if candidate >= data.len() || position >= data.len() {
        return 0;
    }

    let max_len = (data.len() - position)
        .min(data.len() - candidate)
        .min(max_len);

    match_len(
        &data[candidate..candidate + max_len],
        &data[position..position + max_len],
    )
}

/// Like [`match_len_at`], but reject positions a match finder never produces.
pub fn try_match_len_at(
    data: &[u8],
    candidate: usize,
    position: usize,
    max_len: usize,
) -> Result<usize> {
    if position > data.len() {
        return Err(Error::out_of_bounds(position, data.len()));
    }
    if candidate >= position {
        return Err(Error::invalid_candidate(candidate, position));
    }
    Ok(match_len_at(data, candidate, position, max_len))
}

/// Count equal bytes directly before `candidate` and `position`.
///
/// The scan stops at the start of the buffer for the candidate and at
/// `floor` for the current position, usually the end of the last emitted
/// literal run. Returns 0 if either index is past the end of `data`.
#[inline]
pub fn extend_backward(data: &[u8], candidate: usize, position: usize, floor: usize) -> usize {
    if candidate > data.len() || position > data.len() {
        return 0;
    }

    let limit = position.saturating_sub(floor).min(candidate);

    data[candidate - limit..candidate]
        .iter()
        .rev()
        .zip(data[position - limit..position].iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}
