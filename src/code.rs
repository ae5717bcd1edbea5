//! Code table derivation and encoding.

use std::collections::HashMap;

use bit_vec::BitVec;

use crate::error::{Error, Result};
use crate::tree::HuffmanNode;

/// Mapping from symbol to its code: the root-to-leaf path through the tree,
/// `0` for a left descent and `1` for a right descent. One entry per leaf,
/// every code non-empty. Prefix-freedom is guaranteed by the tree shape.
///
/// ```rust
/// let root = huffcode::build_tree(&huffcode::count_frequencies("aab")).unwrap();
/// let codes = huffcode::generate_codes(&root);
/// assert_eq!(codes.len(), 2);
/// ```
pub type CodeTable = HashMap<char, BitVec>;

/// Derives the code table for a tree by depth-first traversal, recording the
/// accumulated path at each leaf.
///
/// When the root itself is a leaf (single-symbol alphabet) the natural
/// root-path code would be empty and therefore unusable in a bit stream;
/// that symbol is assigned the fixed one-bit code `0` instead.
///
/// ```rust
/// let root = huffcode::build_tree(&huffcode::count_frequencies("aaaa")).unwrap();
/// let codes = huffcode::generate_codes(&root);
/// assert_eq!(codes[&'a'].len(), 1);
/// ```
pub fn generate_codes(root: &HuffmanNode) -> CodeTable {
    let mut codes = CodeTable::new();

    if let HuffmanNode::Leaf { symbol, .. } = root {
        codes.insert(*symbol, BitVec::from_elem(1, false));
        return codes;
    }

    let mut path = BitVec::new();
    record_paths(root, &mut path, &mut codes);
    codes
}

fn record_paths(node: &HuffmanNode, path: &mut BitVec, codes: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push(false);
            record_paths(left, path, codes);
            path.pop();

            path.push(true);
            record_paths(right, path, codes);
            path.pop();
        }
    }
}

/// Encodes `text` as the concatenation, in source order, of each symbol's
/// code.
///
/// Fails with [`Error::UnknownSymbol`] when a symbol has no table entry,
/// which only happens when the table was derived from a different source.
///
/// ```rust
/// let root = huffcode::build_tree(&huffcode::count_frequencies("abab")).unwrap();
/// let codes = huffcode::generate_codes(&root);
/// let bits = huffcode::encode("abab", &codes).unwrap();
/// assert_eq!(bits.len(), 4);
/// ```
pub fn encode(text: &str, codes: &CodeTable) -> Result<BitVec> {
    let mut bits = BitVec::new();
    for symbol in text.chars() {
        let code = codes
            .get(&symbol)
            .ok_or(Error::UnknownSymbol { symbol })?;
        for bit in code.iter() {
            bits.push(bit);
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count_frequencies;
    use crate::tree::build_tree;

    fn is_prefix(shorter: &BitVec, longer: &BitVec) -> bool {
        shorter.len() <= longer.len()
            && shorter.iter().zip(longer.iter()).all(|(a, b)| a == b)
    }

    #[test]
    fn codes_are_prefix_free() {
        let root = build_tree(&count_frequencies("sphinx of black quartz, judge my vow")).unwrap();
        let codes = generate_codes(&root);
        for (a, code_a) in &codes {
            for (b, code_b) in &codes {
                if a != b {
                    assert!(!is_prefix(code_a, code_b), "{a:?} prefixes {b:?}");
                }
            }
        }
    }

    #[test]
    fn one_code_per_leaf() {
        let root = build_tree(&count_frequencies("aabbbcc")).unwrap();
        let codes = generate_codes(&root);
        assert_eq!(codes.len(), 3);
        assert!(codes.values().all(|code| !code.is_empty()));
    }

    #[test]
    fn most_frequent_symbol_gets_the_shortest_code() {
        // {a: 2, b: 3, c: 2}: b merges last, so its code is strictly
        // shortest and a, c share the longer length.
        let root = build_tree(&count_frequencies("aabbbcc")).unwrap();
        let codes = generate_codes(&root);
        assert!(codes[&'b'].len() < codes[&'a'].len());
        assert!(codes[&'b'].len() < codes[&'c'].len());
        assert_eq!(codes[&'a'].len(), codes[&'c'].len());
    }

    #[test]
    fn single_symbol_gets_a_one_bit_code() {
        let root = build_tree(&count_frequencies("aaaa")).unwrap();
        let codes = generate_codes(&root);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&'a'], BitVec::from_elem(1, false));
    }

    #[test]
    fn encode_concatenates_in_source_order() {
        let root = build_tree(&count_frequencies("aabbbcc")).unwrap();
        let codes = generate_codes(&root);
        let bits = encode("aabbbcc", &codes).unwrap();
        let expected: usize = "aabbbcc"
            .chars()
            .map(|symbol| codes[&symbol].len())
            .sum();
        assert_eq!(bits.len(), expected);
    }

    #[test]
    fn encode_rejects_foreign_symbols() {
        let root = build_tree(&count_frequencies("aabbbcc")).unwrap();
        let codes = generate_codes(&root);
        let err = encode("abcz", &codes).unwrap_err();
        assert!(matches!(err, Error::UnknownSymbol { symbol: 'z' }));
    }

    #[test]
    fn encode_empty_text_is_empty() {
        let root = build_tree(&count_frequencies("ab")).unwrap();
        let codes = generate_codes(&root);
        assert!(encode("", &codes).unwrap().is_empty());
    }
}
