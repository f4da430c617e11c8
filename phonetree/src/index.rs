use giztoy_bopomofo::encode_transcription;
use serde::Serialize;

use crate::bk::BkTree;
use crate::config::Config;
use crate::error::PhoneTreeError;
use crate::fq::FqTree;
use crate::tree::{Entry, Match, Search, Tree, TreeShape};

/// Index backed by BK-trees.
pub type BkIndex = Index<BkTree>;

/// Index backed by fixed-query trees.
pub type FqIndex = Index<FqTree>;

/// Routes transcriptions by syllable count to one independent tree each.
///
/// The distance is only defined between equal-length transcriptions, so
/// every length gets its own tree, created on first insert.
#[derive(Debug, Clone)]
pub struct Index<T> {
    config: Config,
    buckets: Vec<Option<Bucket<T>>>,
}

#[derive(Debug, Clone)]
struct Bucket<T> {
    tree: T,
    inserts: usize,
    stored: usize,
    duplicates: usize,
}

/// Outcome of a batch insert. Items are processed independently, so one
/// malformed transcription never blocks the rest of the batch.
#[derive(Debug, Default)]
pub struct InsertSummary {
    pub inserted: usize,
    pub duplicates: usize,
    pub rejected: Vec<Rejected>,
}

/// A batch item that could not be indexed.
#[derive(Debug)]
pub struct Rejected {
    pub text: String,
    pub error: PhoneTreeError,
}

/// Per-length counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub length: usize,
    /// Insert attempts, duplicates included.
    pub inserts: usize,
    /// Distinct transcriptions stored.
    pub stored: usize,
    pub duplicates: usize,
    #[serde(flatten)]
    pub shape: TreeShape,
}

/// Counters for every non-empty length, shortest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    pub buckets: Vec<BucketStats>,
}

impl Stats {
    pub fn total_inserts(&self) -> usize {
        self.buckets.iter().map(|b| b.inserts).sum()
    }

    pub fn total_stored(&self) -> usize {
        self.buckets.iter().map(|b| b.stored).sum()
    }

    pub fn total_nodes(&self) -> usize {
        self.buckets.iter().map(|b| b.shape.nodes).sum()
    }
}

impl<T: Tree> Default for Index<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tree> Index<T> {
    /// Creates an empty index with the default [`Config`].
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Creates an empty index. Zero fields in `config` take their defaults.
    ///
    /// # Errors
    /// Returns [`PhoneTreeError::InvalidConfig`] if `max_length` exceeds
    /// [`MAX_LENGTH_LIMIT`](crate::MAX_LENGTH_LIMIT).
    pub fn with_config(config: Config) -> Result<Self, PhoneTreeError> {
        let config = config.with_defaults();
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(config.max_length + 1, || None);
        Self { config, buckets }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Inserts every transcription in `batch`.
    ///
    /// Exact duplicates are absorbed. Invalid or over-long items are
    /// reported in [`InsertSummary::rejected`] and logged.
    pub fn insert<I, S>(&mut self, batch: I) -> InsertSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = InsertSummary::default();
        for text in batch {
            let text = text.as_ref();
            match self.insert_one(text) {
                Ok(true) => summary.inserted += 1,
                Ok(false) => summary.duplicates += 1,
                Err(error) => {
                    tracing::warn!(text, %error, "phonetree: rejected transcription");
                    summary.rejected.push(Rejected {
                        text: text.to_string(),
                        error,
                    });
                }
            }
        }
        tracing::debug!(
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            rejected = summary.rejected.len(),
            "phonetree: batch inserted"
        );
        summary
    }

    /// Inserts one transcription. Returns `false` if it was already stored.
    ///
    /// # Errors
    /// Fails if `text` is not valid bopomofo or is longer than
    /// `max_length`; the index is unchanged in either case.
    pub fn insert_one(&mut self, text: &str) -> Result<bool, PhoneTreeError> {
        let codes = encode_transcription(text)?;
        let len = codes.len();
        let max = self.config.max_length;
        let slot = self
            .buckets
            .get_mut(len)
            .ok_or(PhoneTreeError::TooLong { len, max })?;
        let entry = Entry::new(text, codes);

        match slot {
            Some(bucket) => {
                bucket.inserts += 1;
                let added = bucket.tree.insert(entry)?;
                if added {
                    bucket.stored += 1;
                } else {
                    bucket.duplicates += 1;
                }
                Ok(added)
            }
            None => {
                tracing::debug!(length = len, "phonetree: new bucket");
                *slot = Some(Bucket {
                    tree: T::with_root(entry, &self.config),
                    inserts: 1,
                    stored: 1,
                    duplicates: 0,
                });
                Ok(true)
            }
        }
    }

    /// Returns every stored transcription closer than `threshold` to `text`,
    /// with the number of distance evaluations spent.
    ///
    /// A length with no stored transcriptions yields an empty result.
    ///
    /// # Errors
    /// Fails if `text` is not valid bopomofo.
    pub fn search(&self, text: &str, threshold: u32) -> Result<Search, PhoneTreeError> {
        let query = encode_transcription(text)?;
        let mut found = Search::default();
        if let Some(Some(bucket)) = self.buckets.get(query.len()) {
            bucket.tree.search(&query, threshold, &mut found)?;
        }
        Ok(found)
    }

    /// Like [`search`](Self::search), returning only the matches.
    pub fn query(&self, text: &str, threshold: u32) -> Result<Vec<Match>, PhoneTreeError> {
        Ok(self.search(text, threshold)?.matches)
    }

    /// Reports whether exactly `text` is stored.
    pub fn contains(&self, text: &str) -> Result<bool, PhoneTreeError> {
        Ok(self.query(text, 1)?.iter().any(|m| m.distance == 0))
    }

    /// Number of distinct transcriptions stored.
    pub fn len(&self) -> usize {
        self.buckets.iter().flatten().map(|b| b.stored).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }

    pub fn stats(&self) -> Stats {
        let buckets = self
            .buckets
            .iter()
            .enumerate()
            .filter_map(|(length, bucket)| {
                let bucket = bucket.as_ref()?;
                Some(BucketStats {
                    length,
                    inserts: bucket.inserts,
                    stored: bucket.stored,
                    duplicates: bucket.duplicates,
                    shape: bucket.tree.shape(),
                })
            })
            .collect();
        Stats { buckets }
    }
}
