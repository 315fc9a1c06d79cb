//! Build-once, query-many multi-pattern matcher
//!
//! [`Matcher`] wraps the trie and enforces the build-before-query lifecycle:
//! every insertion marks the matcher as not built, and every query fails with
//! [`MatcherError::NotBuilt`] until [`Matcher::build`] runs again.
//!
//! All three queries share one state-transition loop and differ only in what
//! they collect. Positions are counted in `char`s, not bytes.

use crate::error::{MatcherError, Result};
use crate::trie::{Trie, ROOT};
use serde::Serialize;
use std::ops::ControlFlow;

/// One occurrence of a pattern in the searched text
///
/// `start` and `len` are measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Hit {
    /// Index of the first matched character
    pub start: usize,
    /// Length of the matched pattern in characters
    pub len: usize,
}

impl Hit {
    /// Index one past the last matched character
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice this hit out of the searched text's characters
    ///
    /// Returns `None` if the hit lies outside `chars`.
    pub fn extract(&self, chars: &[char]) -> Option<String> {
        chars.get(self.start..self.end()).map(|s| s.iter().collect())
    }
}

/// Lifecycle of a matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    /// Patterns were added since the last build; queries are rejected
    NotBuilt,
    /// Failure links are current; queries are permitted
    Built,
}

/// Summary of a matcher's size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatcherStats {
    /// Distinct patterns inserted
    pub patterns: usize,
    /// Trie nodes, root included
    pub states: usize,
    /// Longest pattern in characters
    pub max_pattern_len: usize,
    /// Current lifecycle state
    pub state: BuildState,
}

/// Aho-Corasick multi-pattern matcher
///
/// # Example
///
/// ```rust
/// use acmatch::Matcher;
///
/// let mut m = Matcher::new();
/// m.build_with_patterns(["he", "she", "his", "hers"])?;
///
/// assert!(m.is_match("ushers")?);
/// assert_eq!(m.search("ushers")?, vec!["she", "he", "hers"]);
/// # Ok::<(), acmatch::MatcherError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    trie: Trie,
    state: BuildState,
}

impl Matcher {
    /// Create an empty matcher
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            state: BuildState::NotBuilt,
        }
    }

    /// Create a matcher from a batch of patterns and build it
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut m = Self::new();
        m.build_with_patterns(patterns)?;
        Ok(m)
    }

    /// Add one pattern
    ///
    /// Adding a pattern that is already present changes nothing in the trie,
    /// but the matcher still has to be rebuilt before it can be queried.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        if pattern.is_empty() {
            return Err(MatcherError::EmptyPattern);
        }
        self.trie.insert(pattern);
        self.state = BuildState::NotBuilt;
        Ok(())
    }

    /// Compute failure links; the matcher is queryable afterwards
    pub fn build(&mut self) {
        self.trie.compile();
        self.state = BuildState::Built;
    }

    /// Add a batch of patterns on top of any already present, then build
    ///
    /// The batch is validated first: if any pattern is empty nothing is
    /// inserted and the lifecycle state is left unchanged.
    pub fn build_with_patterns<I, S>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<S> = patterns.into_iter().collect();
        if patterns.iter().any(|p| p.as_ref().is_empty()) {
            return Err(MatcherError::EmptyPattern);
        }

        for pattern in &patterns {
            self.trie.insert(pattern.as_ref());
        }
        self.build();
        Ok(())
    }

    /// True once `build()` has run with no insertion since
    pub fn is_ready(&self) -> bool {
        self.state == BuildState::Built
    }

    /// Current lifecycle state
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Number of distinct patterns
    pub fn pattern_count(&self) -> usize {
        self.trie.pattern_count()
    }

    /// Number of automaton states, root included
    pub fn state_count(&self) -> usize {
        self.trie.state_count()
    }

    /// Size summary
    pub fn stats(&self) -> MatcherStats {
        MatcherStats {
            patterns: self.trie.pattern_count(),
            states: self.trie.state_count(),
            max_pattern_len: self.trie.max_pattern_len(),
            state: self.state,
        }
    }

    /// True if any pattern occurs in `text`
    ///
    /// Stops at the first match.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        let mut found = false;
        self.scan(text.chars(), |_, _| {
            found = true;
            ControlFlow::Break(())
        })?;
        Ok(found)
    }

    /// Every occurrence as start/length pairs
    ///
    /// Ordered by end position; hits sharing an end position are longest
    /// first.
    pub fn search_indexed(&self, text: &str) -> Result<Vec<Hit>> {
        let mut hits = Vec::new();
        self.scan(text.chars(), |end, lens| {
            hits.extend(lens.iter().map(|&len| Hit {
                start: end + 1 - len,
                len,
            }));
            ControlFlow::Continue(())
        })?;
        Ok(hits)
    }

    /// Every occurrence as the matched text, in the same order as
    /// [`search_indexed`](Self::search_indexed)
    pub fn search(&self, text: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        self.scan(chars.iter().copied(), |end, lens| {
            matches.extend(
                lens.iter()
                    .map(|&len| chars[end + 1 - len..=end].iter().collect::<String>()),
            );
            ControlFlow::Continue(())
        })?;
        Ok(matches)
    }

    fn check(&self) -> Result<()> {
        match self.state {
            BuildState::Built => Ok(()),
            BuildState::NotBuilt => Err(MatcherError::NotBuilt),
        }
    }

    // Shared transition loop. `on_match` sees the end position (inclusive)
    // and the non-empty list of pattern lengths ending there.
    fn scan<I, F>(&self, chars: I, mut on_match: F) -> Result<()>
    where
        I: Iterator<Item = char>,
        F: FnMut(usize, &[usize]) -> ControlFlow<()>,
    {
        self.check()?;

        let mut current = ROOT;
        for (i, ch) in chars.enumerate() {
            current = self.trie.next_state(current, ch);
            let lens = self.trie.pattern_ends(current);
            if !lens.is_empty() && on_match(i, lens).is_break() {
                break;
            }
        }
        Ok(())
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}
