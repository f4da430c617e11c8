//! Burkhard-Keller tree keyed by the exact distance to the parent.

use std::collections::BTreeMap;
use std::collections::btree_map;

use giztoy_bopomofo::{Transcription, distance};

use crate::config::Config;
use crate::error::PhoneTreeError;
use crate::tree::{Entry, Match, Search, Tree, TreeShape, window};

/// A BK-tree over equal-length transcriptions.
///
/// Every child registered under key `d` is exactly `d` away from its
/// parent's entry, which lets a search skip any child whose key lies
/// outside `[d - threshold, d + threshold]`.
#[derive(Debug, Clone)]
pub struct BkTree {
    root: BkNode,
}

#[derive(Debug, Clone)]
struct BkNode {
    entry: Entry,
    children: BTreeMap<u32, BkNode>,
}

impl BkNode {
    fn new(entry: Entry) -> Self {
        Self {
            entry,
            children: BTreeMap::new(),
        }
    }

    fn search(
        &self,
        query: &Transcription,
        threshold: u32,
        found: &mut Search,
    ) -> Result<(), PhoneTreeError> {
        let d = distance(self.entry.codes(), query)?;
        found.lookups += 1;
        if d < threshold {
            found.matches.push(Match::new(&self.entry, d));
        }

        for (_, child) in self.children.range(window(d, threshold)) {
            child.search(query, threshold, found)?;
        }
        Ok(())
    }

    fn shape(&self, level: usize, shape: &mut TreeShape) {
        shape.nodes += 1;
        shape.depth = shape.depth.max(level);
        if self.children.is_empty() {
            shape.leaves += 1;
        } else {
            shape.internals += 1;
        }
        for child in self.children.values() {
            child.shape(level + 1, shape);
        }
    }
}

impl Tree for BkTree {
    fn with_root(entry: Entry, _config: &Config) -> Self {
        Self {
            root: BkNode::new(entry),
        }
    }

    fn insert(&mut self, entry: Entry) -> Result<bool, PhoneTreeError> {
        let mut node = &mut self.root;
        loop {
            let d = distance(node.entry.codes(), entry.codes())?;
            if d == 0 {
                return Ok(false);
            }
            match node.children.entry(d) {
                btree_map::Entry::Occupied(child) => node = child.into_mut(),
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(BkNode::new(entry));
                    return Ok(true);
                }
            }
        }
    }

    fn search(
        &self,
        query: &Transcription,
        threshold: u32,
        found: &mut Search,
    ) -> Result<(), PhoneTreeError> {
        self.root.search(query, threshold, found)
    }

    fn shape(&self) -> TreeShape {
        let mut shape = TreeShape::default();
        self.root.shape(1, &mut shape);
        shape
    }
}
