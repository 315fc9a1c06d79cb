//! Error types for the acmatch library

use std::path::PathBuf;

/// Result type alias for matcher operations
pub type Result<T> = std::result::Result<T, MatcherError>;

/// Main error type for matcher operations
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// A query ran before `build()` (or after an insertion that invalidated
    /// the failure links). This is a usage bug, not a data condition.
    #[error("matcher is not built: call `build()` or `build_with_patterns()` before searching")]
    NotBuilt,

    /// The empty string was offered as a pattern
    #[error("invalid pattern: empty patterns are not supported")]
    EmptyPattern,

    /// Failure reading a pattern list
    #[error("I/O error: {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl MatcherError {
    /// True for the lifecycle violation raised by queries on an unbuilt matcher
    pub fn is_not_built(&self) -> bool {
        matches!(self, MatcherError::NotBuilt)
    }
}
