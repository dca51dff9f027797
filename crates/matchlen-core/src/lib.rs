//! # Matchlen Core
//!
//! Shared error and value types for the `matchlen` prefix scanner.
//!
//! The scanner itself is pure and cannot fail. The types here serve the
//! layer around it: checked entry points, window-relative helpers, and the
//! offset prober that turns raw lengths into [`Match`] values.
//!
//! ## Example
//!
//! ```
//! use matchlen_core::{Match, MatchConfig};
//!
//! let config = MatchConfig::default().with_min_match(4);
//! assert!(config.validate().is_ok());
//!
//! let m = Match::new(16, 8, 5);
//! assert_eq!(m.source(), 8);
//! assert_eq!(m.end(), 21);
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Match, MatchConfig, MAX_MATCH_LENGTH, MIN_MATCH_LENGTH};
