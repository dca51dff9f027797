//! Error types for match length operations.

use thiserror::Error;

/// Result type alias for match length operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Match length error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The first sequence is longer than the second.
    #[error("length order violated: first sequence has {first} bytes, second has {second}")]
    LengthOrder { first: usize, second: usize },

    /// A candidate must lie strictly before the position it is matched against.
    #[error("invalid candidate {candidate}: must precede position {position}")]
    InvalidCandidate { candidate: usize, position: usize },

    /// Index past the end of the window.
    #[error("index {index} out of bounds for window of {len} bytes")]
    OutOfBounds { index: usize, len: usize },

    /// Rejected match configuration.
    #[error("invalid config field `{field}`: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

impl Error {
    /// Create a length order error.
    pub fn length_order(first: usize, second: usize) -> Self {
        Error::LengthOrder { first, second }
    }

    /// Create an invalid candidate error.
    pub fn invalid_candidate(candidate: usize, position: usize) -> Self {
        Error::InvalidCandidate {
            candidate,
            position,
        }
    }

    /// Create an out of bounds error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::OutOfBounds { index, len }
    }

    /// Create an invalid config error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::LengthOrder { .. } => "length_order",
            Error::InvalidCandidate { .. } => "invalid_candidate",
            Error::OutOfBounds { .. } => "out_of_bounds",
            Error::InvalidConfig { .. } => "invalid_config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::length_order(9, 4).to_string(),
            "length order violated: first sequence has 9 bytes, second has 4"
        );
        assert_eq!(
            Error::invalid_candidate(7, 7).to_string(),
            "invalid candidate 7: must precede position 7"
        );
        assert_eq!(
            Error::out_of_bounds(12, 10).to_string(),
            "index 12 out of bounds for window of 10 bytes"
        );
        assert_eq!(
            Error::invalid_config("min_match", "must be non-zero").to_string(),
            "invalid config field `min_match`: must be non-zero"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(Error::length_order(1, 0).category(), "length_order");
        assert_eq!(Error::invalid_candidate(1, 0).category(), "invalid_candidate");
        assert_eq!(Error::out_of_bounds(1, 0).category(), "out_of_bounds");
        assert_eq!(Error::invalid_config("max_match", "").category(), "invalid_config");
    }
}
