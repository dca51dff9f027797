//! # Matchlen
//!
//! Common prefix length for LZ77-style match finding.
//!
//! [`match_len`] answers the question every match finder asks over and over:
//! given a candidate back-reference, how many bytes does it cover? It
//! compares 8 bytes at a time by XOR and locates the first differing byte
//! from the trailing zero count of the difference, then finishes the last
//! few bytes one at a time.
//!
//! This is the portable implementation. Words are always read little-endian,
//! so results are identical on every target.
//!
//! ## Modules
//!
//! - [`prefix`] - the scanner and its bounded and checked variants
//! - [`window`] - forward and backward measurement inside one buffer
//! - [`prober`] - offset probing with configurable length limits
//!
//! ## Example
//!
//! ```
//! use matchlen::{match_len, MatchConfig, MatchProber};
//!
//! assert_eq!(match_len(&[0xAA, 0xBB], &[0xAA, 0xCC]), 1);
//!
//! let prober = MatchProber::new(MatchConfig::default())?;
//! let data = b"compress, compress, compress";
//! let m = prober.best_match(data, 10, [10, 5]).unwrap();
//! assert_eq!(m.offset, 10);
//! assert_eq!(m.length, 18);
//! # Ok::<(), matchlen::Error>(())
//! ```

pub mod prefix;
pub mod prober;
pub mod window;

pub use matchlen_core::{Error, Match, MatchConfig, Result, MAX_MATCH_LENGTH, MIN_MATCH_LENGTH};
pub use prefix::{checked_match_len, match_len, match_len_bytewise, match_len_limited};
pub use prober::MatchProber;
pub use window::{extend_backward, match_len_at, try_match_len_at};
