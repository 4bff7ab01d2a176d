//! Longest-match prefix table for keyword and literal recognition.
//!
//! A [`Trie`] is built once from a fixed pattern set and then queried at many
//! input positions. Every non-empty prefix of every pattern is stored in a
//! flat map alongside two flags:
//!
//! - [`PrefixInfo::MATCH`]: some pattern ends exactly at this prefix
//! - [`PrefixInfo::DONE`]: no pattern extends past this prefix
//!
//! A query walks increasing prefix lengths of the input, remembering the last
//! `MATCH`, and stops at the first missing prefix or the first `DONE`. Lookup
//! cost is bounded by the longest pattern; there is no backtracking.
//!
//! The table is immutable after construction, so one instance can be shared
//! across parser threads without locking.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

bitflags! {
    /// Per-prefix metadata stored in a [`Trie`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct PrefixInfo: u8 {
        /// No pattern strictly extends this prefix; a scan can stop here.
        const DONE = 1 << 0;
        /// This prefix is itself a complete pattern.
        const MATCH = 1 << 1;
    }
}

impl PrefixInfo {
    /// Is this prefix a dead end?
    #[inline]
    pub fn is_done(self) -> bool {
        self.contains(Self::DONE)
    }

    /// Does a pattern end exactly here?
    #[inline]
    pub fn is_match(self) -> bool {
        self.contains(Self::MATCH)
    }
}

/// Immutable longest-match prefix table.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    prefixes: FxHashMap<Box<[u8]>, PrefixInfo>,
}

impl Trie {
    /// Build a trie from `patterns`.
    ///
    /// Duplicate patterns collapse and empty patterns are ignored. The result
    /// does not depend on iteration order.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut prefixes: FxHashMap<Box<[u8]>, PrefixInfo> = FxHashMap::default();
        let mut pattern_count = 0usize;

        for pattern in patterns {
            let pattern = pattern.as_ref();
            pattern_count += 1;
            for len in 1..=pattern.len() {
                let last = len == pattern.len();
                let prefix = &pattern[..len];
                match prefixes.get_mut(prefix) {
                    None => {
                        let info = if last {
                            PrefixInfo::DONE | PrefixInfo::MATCH
                        } else {
                            PrefixInfo::empty()
                        };
                        prefixes.insert(prefix.into(), info);
                    }
                    Some(info) if last => info.insert(PrefixInfo::MATCH),
                    Some(info) => info.remove(PrefixInfo::DONE),
                }
            }
        }

        tracing::debug!(
            patterns = pattern_count,
            prefixes = prefixes.len(),
            "built prefix trie"
        );
        Self { prefixes }
    }

    /// Length of the longest pattern that is a prefix of `text`, or 0.
    pub fn longest_match(&self, text: &[u8]) -> usize {
        let mut match_len = 0;
        for len in 1..=text.len() {
            let Some(info) = self.prefixes.get(&text[..len]) else {
                break;
            };
            if info.is_match() {
                match_len = len;
            }
            if info.is_done() {
                break;
            }
        }
        match_len
    }

    /// [`longest_match`](Self::longest_match) over the bytes of `text`.
    ///
    /// The result is a byte length. It always lands on a char boundary when
    /// every pattern is valid UTF-8.
    #[inline]
    pub fn longest_match_str(&self, text: &str) -> usize {
        self.longest_match(text.as_bytes())
    }

    /// Flags stored for `prefix`, or `None` if no pattern starts with it.
    pub fn prefix_info(&self, prefix: &[u8]) -> Option<PrefixInfo> {
        self.prefixes.get(prefix).copied()
    }

    /// Number of distinct prefixes stored.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns `true` if the trie matches nothing.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<P: AsRef<[u8]>> FromIterator<P> for Trie {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
