//! Match descriptors and prober configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Minimum match length for Zstandard sequences.
pub const MIN_MATCH_LENGTH: usize = 3;

/// Maximum match length for a single Zstandard sequence (RFC 8878).
pub const MAX_MATCH_LENGTH: usize = 131074;

/// A back-reference found in the input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Position in the input where the match starts.
    pub position: usize,
    /// Offset back to the matching data.
    pub offset: usize,
    /// Length of the match.
    pub length: usize,
}

impl Match {
    /// Create a new match.
    #[inline]
    pub fn new(position: usize, offset: usize, length: usize) -> Self {
        Self {
            position,
            offset,
            length,
        }
    }

    /// Position of the referenced bytes.
    #[inline]
    pub fn source(&self) -> usize {
        self.position - self.offset
    }

    /// First position after the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

/// Length limits applied when probing candidate offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Shortest match worth reporting (default: 3).
    pub min_match: usize,

    /// Longest match a single probe will measure (default: 131074).
    pub max_match: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            min_match: MIN_MATCH_LENGTH,
            max_match: MAX_MATCH_LENGTH,
        }
    }
}

impl MatchConfig {
    /// Set the minimum reported match length.
    pub fn with_min_match(mut self, min_match: usize) -> Self {
        self.min_match = min_match;
        self
    }

    /// Set the maximum measured match length.
    pub fn with_max_match(mut self, max_match: usize) -> Self {
        self.max_match = max_match;
        self
    }

    /// Check that the limits describe a non-empty range.
    pub fn validate(&self) -> Result<()> {
        if self.min_match == 0 {
            debug!("rejected match config: min_match is zero");
            return Err(Error::invalid_config("min_match", "must be non-zero"));
        }
        if self.max_match < self.min_match {
            debug!(
                min_match = self.min_match,
                max_match = self.max_match,
                "rejected match config: max_match below min_match"
            );
            return Err(Error::invalid_config(
                "max_match",
                format!("{} is below min_match {}", self.max_match, self.min_match),
            ));
        }
        Ok(())
    }
}
