//! Huffman tree construction.
//!
//! A [`HuffmanTree`] is built from a [`FrequencyTable`] by the classic greedy
//! merge: keep all nodes in a min-priority queue ordered by weight, repeatedly
//! extract the two lightest, join them under a new internal node carrying the
//! summed weight, and reinsert, until one node remains.
//!
//! # Tie-breaking
//!
//! Multiple optimal trees exist whenever weights collide, so the extraction
//! order among equal weights is pinned to keep code tables reproducible:
//! the queue orders by `(weight, sequence number)`, where sequence numbers
//! are assigned in insertion order, leaves are inserted in ascending symbol
//! order, and each merged node takes the next number. Equal weights therefore
//! pop oldest-first, and of the two extracted nodes the first becomes the
//! left child.

use crate::error::{HuffmanError, Result};
use crate::freq::FrequencyTable;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A node of a Huffman tree.
///
/// Leaves carry a symbol and its frequency count; internal nodes carry the
/// sum of their children's weights and exclusively own exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol of the alphabet and its occurrence count.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: u8,
        /// Occurrence count of the symbol.
        weight: u64,
    },
    /// A merge point joining two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// The node's weight.
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Queue entry pairing a node with its tie-break sequence number.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    seq: u64,
    node: HuffmanNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

/// An immutable Huffman tree over a symbol alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree for the given frequency table.
    ///
    /// A table with a single entry yields a tree whose root is that lone
    /// leaf; no internal node is created. An empty table has no defined
    /// tree and fails with [`HuffmanError::EmptyInput`].
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        // Leaves enter the queue in ascending symbol order so sequence
        // numbers, and with them tie-breaking, are deterministic.
        let mut leaves: Vec<(u8, u64)> = freq.iter().collect();
        leaves.sort_unstable_by_key(|&(symbol, _)| symbol);

        let mut heap = BinaryHeap::with_capacity(leaves.len());
        let mut seq = 0u64;
        for (symbol, weight) in leaves {
            heap.push(Reverse(HeapEntry {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            }));
            seq += 1;
        }

        while heap.len() > 1 {
            let Reverse(first) = heap.pop().expect("heap holds at least two entries");
            let Reverse(second) = heap.pop().expect("heap holds at least two entries");

            // First-extracted becomes the left child.
            let weight = first.weight + second.weight;
            heap.push(Reverse(HeapEntry {
                weight,
                seq,
                node: HuffmanNode::Internal {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            }));
            seq += 1;
        }

        let Reverse(entry) = heap.pop().expect("non-empty table yields a root");
        Ok(Self { root: entry.node })
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight of the tree; equals the counted input's length.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves; equals the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 1,
                HuffmanNode::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }
}
