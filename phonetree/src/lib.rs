//! Fuzzy lookup over bopomofo transcriptions.
//!
//! Two interchangeable metric trees are provided, both pruning with the
//! component-wise distance from [`giztoy_bopomofo`]:
//! - [`BkTree`] - each node is keyed by its exact distance to its parent
//! - [`FqTree`] - each depth shares one pivot, leaves hold small buckets
//!
//! [`Index`] routes every transcription to a tree for its syllable count,
//! since the distance is only defined between equal-length transcriptions.
//!
//! # Example
//!
//! ```rust
//! use giztoy_phonetree::{BkIndex, FqIndex};
//!
//! let words = ["ㄘㄜˋ ㄕˋ", "ㄘㄜ ㄕˋ", "ㄘㄜˋ ㄕ", "ㄘㄜ ㄕ", "ㄔㄜˋ ㄙˋ"];
//!
//! let mut bk = BkIndex::new();
//! bk.insert(words);
//! let mut fq = FqIndex::new();
//! fq.insert(words);
//!
//! // Threshold is exclusive: distance 1 needs threshold 2.
//! assert_eq!(bk.query("ㄘㄜˋ ㄕˋ", 2).unwrap().len(), 3);
//! assert_eq!(fq.query("ㄘㄜˋ ㄕˋ", 2).unwrap().len(), 3);
//!
//! // Different syllable count: nothing to compare against.
//! assert!(bk.query("ㄘㄜˋ", 100).unwrap().is_empty());
//! ```
//!
//! # Concurrency
//!
//! Indexes are plain owned data. Queries take `&self` and may run in
//! parallel; inserts take `&mut self`.

mod bk;
mod config;
mod error;
mod fq;
mod index;
mod tree;

pub use bk::BkTree;
pub use config::{Config, MAX_LENGTH_LIMIT};
pub use error::PhoneTreeError;
pub use fq::FqTree;
pub use index::{BkIndex, BucketStats, FqIndex, Index, InsertSummary, Rejected, Stats};
pub use tree::{Entry, Match, Search, Tree, TreeShape};
