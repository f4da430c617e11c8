use std::ops::RangeInclusive;

use giztoy_bopomofo::Transcription;
use serde::Serialize;

use crate::config::Config;
use crate::error::PhoneTreeError;

/// A stored transcription: the caller's text plus its encoded syllables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,
    codes: Transcription,
}

impl Entry {
    pub fn new(text: impl Into<String>, codes: Transcription) -> Self {
        Self {
            text: text.into(),
            codes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn codes(&self) -> &Transcription {
        &self.codes
    }
}

/// A stored transcription found within the query threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    pub value: String,
    pub distance: u32,
}

impl Match {
    pub(crate) fn new(entry: &Entry, distance: u32) -> Self {
        Self {
            value: entry.text.clone(),
            distance,
        }
    }
}

/// Result of a single query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Search {
    /// Matches in descent order.
    pub matches: Vec<Match>,
    /// Metric evaluations performed while searching.
    pub lookups: usize,
}

/// Node counts of one tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeShape {
    pub nodes: usize,
    pub leaves: usize,
    pub internals: usize,
    /// Number of levels below the root, root included.
    pub depth: usize,
    /// Fixed-query-tree pivots; always 0 for the BK-tree.
    pub pivots: usize,
}

/// A metric tree over transcriptions of a single length.
///
/// [`Index`](crate::Index) owns one tree per syllable count and never hands
/// a tree entries of a different length.
pub trait Tree: Sized {
    /// Creates a tree whose only entry is `entry`.
    fn with_root(entry: Entry, config: &Config) -> Self;

    /// Stores `entry`. Returns `false` if an identical transcription is
    /// already present, in which case the tree is unchanged.
    fn insert(&mut self, entry: Entry) -> Result<bool, PhoneTreeError>;

    /// Appends every entry closer than `threshold` to `query` into `found`.
    fn search(
        &self,
        query: &Transcription,
        threshold: u32,
        found: &mut Search,
    ) -> Result<(), PhoneTreeError>;

    fn shape(&self) -> TreeShape;
}

/// Child keys that may hold matches when the query is `d` away from the
/// node's comparison key.
#[inline]
pub(crate) fn window(d: u32, threshold: u32) -> RangeInclusive<u32> {
    d.saturating_sub(threshold)..=d.saturating_add(threshold)
}
