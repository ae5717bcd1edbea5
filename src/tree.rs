//! Huffman tree construction: greedy, priority-queue-driven merging.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// A node of the Huffman tree: either a leaf holding one symbol and its
/// weight, or an internal node whose weight is the sum of its two children.
///
/// Ownership is strictly tree-shaped and the tree is immutable once built,
/// so encode and decode sessions may share it read-only.
///
/// ```rust
/// let freq = huffcode::count_frequencies("aabbbcc");
/// let root = huffcode::build_tree(&freq).unwrap();
/// assert_eq!(root.weight(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf carrying exactly one symbol.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: char,
        /// Number of occurrences of the symbol in the source.
        weight: u64,
    },
    /// An internal node owning exactly two children.
    Internal {
        /// Sum of the two children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// The weight of this node: an occurrence count at leaves, the sum of
    /// both children at internal nodes.
    ///
    /// ```rust
    /// let root = huffcode::build_tree(&huffcode::count_frequencies("ab")).unwrap();
    /// assert_eq!(root.weight(), 2);
    /// ```
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf. The root itself is a leaf exactly when
    /// the alphabet has a single distinct symbol.
    ///
    /// ```rust
    /// let root = huffcode::build_tree(&huffcode::count_frequencies("aaaa")).unwrap();
    /// assert!(root.is_leaf());
    /// ```
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Child selected by one bit: `0` descends left, `1` descends right.
    /// `None` at a leaf.
    pub(crate) fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => {
                Some(if bit { right } else { left })
            }
        }
    }

    /// All leaves of this subtree as `(symbol, weight)` pairs, in
    /// left-to-right order.
    ///
    /// ```rust
    /// let root = huffcode::build_tree(&huffcode::count_frequencies("aaaa")).unwrap();
    /// assert_eq!(root.leaves(), vec![('a', 4)]);
    /// ```
    pub fn leaves(&self) -> Vec<(char, u64)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<(char, u64)>) {
        match self {
            HuffmanNode::Leaf { symbol, weight } => out.push((*symbol, *weight)),
            HuffmanNode::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

// Min-queue entry. `BinaryHeap` is a max-heap, so the ordering is reversed;
// the sequence number breaks weight ties deterministically (lower sequence
// pops first).
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
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Builds the Huffman tree for a frequency table.
///
/// Seeds a min-priority queue with one leaf per symbol, then repeatedly pops
/// the two lowest-weight nodes and merges them under a new internal node
/// (first popped on the left, second on the right) until one node remains.
///
/// Ties between equal weights are broken by a composite `(weight, insertion
/// sequence)` key, with leaves seeded in ascending symbol order, so the
/// resulting tree shape is identical across runs and platforms.
///
/// Fails with [`Error::EmptyAlphabet`] when the table is empty. A
/// single-entry table yields a lone leaf as the root; code derivation
/// special-cases that shape.
///
/// ```rust
/// let freq = huffcode::count_frequencies("mississippi");
/// let root = huffcode::build_tree(&freq).unwrap();
/// assert_eq!(root.weight(), 11);
/// ```
pub fn build_tree(freq: &FrequencyTable) -> Result<HuffmanNode> {
    if freq.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut symbols: Vec<(char, u64)> = freq.iter().map(|(&s, &w)| (s, w)).collect();
    symbols.sort_unstable_by_key(|&(symbol, _)| symbol);

    let mut queue = BinaryHeap::with_capacity(symbols.len());
    let mut seq = 0u64;
    for (symbol, weight) in symbols {
        queue.push(HeapEntry {
            weight,
            seq,
            node: HuffmanNode::Leaf { symbol, weight },
        });
        seq += 1;
    }

    loop {
        let first = match queue.pop() {
            Some(entry) => entry,
            None => return Err(Error::EmptyAlphabet),
        };
        let second = match queue.pop() {
            Some(entry) => entry,
            // Last node standing is the root.
            None => return Ok(first.node),
        };

        let weight = first.weight + second.weight;
        queue.push(HeapEntry {
            weight,
            seq,
            node: HuffmanNode::Internal {
                weight,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        seq += 1;
    }
}
