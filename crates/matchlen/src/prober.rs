//! Offset probing on top of the prefix scanner.
//!
//! Encoders collect candidate offsets from several places (repeat offsets,
//! hash chains, predictions) and need to know which one yields the longest
//! usable match. [`MatchProber`] measures each candidate with the prefix
//! scanner and applies the configured length limits.

use matchlen_core::{Match, MatchConfig, Result};
use tracing::trace;

use crate::window::match_len_at;

/// Measures candidate offsets against a fixed [`MatchConfig`].
#[derive(Debug, Clone)]
pub struct MatchProber {
    config: MatchConfig,
}

impl MatchProber {
    /// Create a prober, validating the configuration.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Probe for a match `offset` bytes back from `position`.
    ///
    /// Returns `None` for a zero offset, an offset reaching before the start
    /// of `data`, or a match shorter than `min_match`.
    #[inline]
    pub fn probe(&self, data: &[u8], position: usize, offset: usize) -> Option<Match> {
        if offset == 0 || offset > position {
            return None;
        }

        let length = match_len_at(data, position - offset, position, self.config.max_match);
        (length >= self.config.min_match).then(|| Match::new(position, offset, length))
    }

    /// Find the longest match among `offsets`.
    ///
    /// Offsets are probed in order and the earlier one wins a tie, so callers
    /// should list cheaper offsets first. The search stops once a match can
    /// no longer be beaten.
    pub fn best_match<I>(&self, data: &[u8], position: usize, offsets: I) -> Option<Match>
    where
        I: IntoIterator<Item = usize>,
    {
        let ceiling = data
            .len()
            .saturating_sub(position)
            .min(self.config.max_match);

        let mut best: Option<Match> = None;
        let mut probes = 0usize;

        for offset in offsets {
            probes += 1;
            let Some(candidate) = self.probe(data, position, offset) else {
                continue;
            };

            if best.is_none_or(|b| candidate.length > b.length) {
                best = Some(candidate);
                if candidate.length >= ceiling {
                    break;
                }
            }
        }

        if let Some(m) = best {
            trace!(
                position = m.position,
                offset = m.offset,
                length = m.length,
                probes,
                "selected match"
            );
        }

        best
    }
}
