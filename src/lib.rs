//! acmatch - Multi-Pattern Exact String Matching
//!
//! acmatch builds an Aho-Corasick automaton once from a set of patterns and
//! then scans arbitrary text for every occurrence of every pattern in a
//! single linear pass. It is meant for keyword scanning and content
//! filtering, where the pattern set is stable and query volume is high.
//!
//! # Quick Start
//!
//! ```rust
//! use acmatch::{Hit, Matcher};
//!
//! let mut matcher = Matcher::new();
//! matcher.add_pattern("国人")?;
//! matcher.add_pattern("中国人")?;
//! matcher.add_pattern("新中国")?;
//! matcher.build();
//!
//! let text = "我是新中国人";
//! assert!(matcher.is_match(text)?);
//! assert_eq!(matcher.search(text)?, vec!["新中国", "中国人", "国人"]);
//!
//! // Offsets are counted in characters, not bytes
//! assert_eq!(matcher.search_indexed(text)?[0], Hit { start: 2, len: 3 });
//! # Ok::<(), acmatch::MatcherError>(())
//! ```
//!
//! # Lifecycle
//!
//! ```text
//!   new() ──► NotBuilt ──build()──► Built
//!                ▲                    │
//!                └──add_pattern()─────┘
//! ```
//!
//! Queries on a `NotBuilt` matcher return [`MatcherError::NotBuilt`]; they
//! never silently return an empty result. A built matcher is immutable and
//! `Sync`, so it can be shared across threads and queried concurrently.
//!
//! # Match Order
//!
//! Matches are reported by ascending end position. Matches that end at the
//! same character are reported longest first.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for matcher operations
pub mod error;
pub mod matcher;
mod queue;
mod trie;
pub mod wordlist;

pub use crate::error::{MatcherError, Result};
pub use crate::matcher::{BuildState, Hit, Matcher, MatcherStats};
pub use crate::queue::FifoQueue;

// Version information
/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
