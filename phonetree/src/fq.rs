//! Fixed-query tree: one shared pivot per depth instead of one key per node.

use std::collections::BTreeMap;
use std::collections::btree_map;

use giztoy_bopomofo::{Transcription, distance};

use crate::config::Config;
use crate::error::PhoneTreeError;
use crate::tree::{Entry, Match, Search, Tree, TreeShape, window};

/// A fixed-query tree over equal-length transcriptions.
///
/// Internal nodes at depth `k` dispatch on the distance to `pivots[k]`.
/// Leaves hold up to `bucket_size` entries; a full leaf that receives
/// another entry becomes internal and its entries are placed again one
/// level down, appending a new pivot the first time a depth is reached.
///
/// Pivots are never revised once assigned, so the shape depends on
/// insertion order.
#[derive(Debug, Clone)]
pub struct FqTree {
    pivots: Vec<Entry>,
    root: FqNode,
    bucket_size: usize,
}

#[derive(Debug, Clone)]
enum FqNode {
    Leaf(Vec<Entry>),
    Internal(BTreeMap<u32, FqNode>),
}

impl FqTree {
    /// The pivot used at each depth, root first.
    pub fn pivots(&self) -> impl Iterator<Item = &str> {
        self.pivots.iter().map(Entry::text)
    }
}

struct Placer<'a> {
    pivots: &'a mut Vec<Entry>,
    bucket_size: usize,
}

impl Placer<'_> {
    fn place(
        &mut self,
        node: &mut FqNode,
        depth: usize,
        entry: Entry,
    ) -> Result<bool, PhoneTreeError> {
        match node {
            FqNode::Internal(children) => {
                let d = distance(self.pivots[depth].codes(), entry.codes())?;
                match children.entry(d) {
                    btree_map::Entry::Occupied(child) => {
                        self.place(child.into_mut(), depth + 1, entry)
                    }
                    btree_map::Entry::Vacant(slot) => {
                        slot.insert(FqNode::Leaf(vec![entry]));
                        Ok(true)
                    }
                }
            }
            FqNode::Leaf(items) => {
                if items.iter().any(|e| e.codes() == entry.codes()) {
                    return Ok(false);
                }
                if items.len() < self.bucket_size {
                    items.push(entry);
                    return Ok(true);
                }

                let mut items = std::mem::take(items);
                if self.pivots.len() <= depth {
                    tracing::trace!(depth, pivot = entry.text(), "phonetree: new pivot");
                    self.pivots.push(entry.clone());
                }
                items.push(entry);

                tracing::trace!(depth, items = items.len(), "phonetree: split leaf");
                *node = FqNode::Internal(BTreeMap::new());
                for item in items {
                    self.place(node, depth, item)?;
                }
                Ok(true)
            }
        }
    }
}

impl FqNode {
    fn search(
        &self,
        depth: usize,
        pivots: &[Entry],
        query: &Transcription,
        threshold: u32,
        found: &mut Search,
    ) -> Result<(), PhoneTreeError> {
        match self {
            FqNode::Internal(children) => {
                let d = distance(query, pivots[depth].codes())?;
                found.lookups += 1;
                for (_, child) in children.range(window(d, threshold)) {
                    child.search(depth + 1, pivots, query, threshold, found)?;
                }
            }
            FqNode::Leaf(items) => {
                for candidate in items {
                    let d = distance(candidate.codes(), query)?;
                    found.lookups += 1;
                    if d < threshold {
                        found.matches.push(Match::new(candidate, d));
                    }
                }
            }
        }
        Ok(())
    }

    fn shape(&self, level: usize, shape: &mut TreeShape) {
        shape.nodes += 1;
        shape.depth = shape.depth.max(level);
        match self {
            FqNode::Leaf(_) => shape.leaves += 1,
            FqNode::Internal(children) => {
                shape.internals += 1;
                for child in children.values() {
                    child.shape(level + 1, shape);
                }
            }
        }
    }
}

impl Tree for FqTree {
    fn with_root(entry: Entry, config: &Config) -> Self {
        let leaf = FqNode::Leaf(vec![entry.clone()]);
        let root = FqNode::Internal(BTreeMap::from([(0, leaf)]));
        Self {
            pivots: vec![entry],
            root,
            bucket_size: config.bucket_size.max(1),
        }
    }

    fn insert(&mut self, entry: Entry) -> Result<bool, PhoneTreeError> {
        let mut placer = Placer {
            pivots: &mut self.pivots,
            bucket_size: self.bucket_size,
        };
        placer.place(&mut self.root, 0, entry)
    }

    fn search(
        &self,
        query: &Transcription,
        threshold: u32,
        found: &mut Search,
    ) -> Result<(), PhoneTreeError> {
        self.root.search(0, &self.pivots, query, threshold, found)
    }

    fn shape(&self) -> TreeShape {
        let mut shape = TreeShape::default();
        self.root.shape(1, &mut shape);
        shape.pivots = self.pivots.len();
        shape
    }
}
