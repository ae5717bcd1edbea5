//! Decoding: walking the tree bit by bit.

use bit_vec::BitVec;

use crate::error::{Error, Result};
use crate::tree::HuffmanNode;

/// Reconstructs the original text from a bit stream and the tree that
/// produced the corresponding code table.
///
/// A cursor starts at the root; each bit moves it to the left child on `0`
/// or the right child on `1`. Reaching a leaf appends that leaf's symbol and
/// resets the cursor to the root. A stream that exhausts mid-symbol, or asks
/// for a child a leaf does not have, is inconsistent with the tree and fails
/// with [`Error::MalformedStream`] rather than silently mis-decoding.
///
/// A single-leaf tree has no structure to descend, mirroring the fixed
/// one-bit code assignment: each `0` bit emits the sole symbol, and any `1`
/// bit is malformed.
///
/// ```rust
/// let root = huffcode::build_tree(&huffcode::count_frequencies("abab")).unwrap();
/// let codes = huffcode::generate_codes(&root);
/// let bits = huffcode::encode("abab", &codes).unwrap();
/// assert_eq!(huffcode::decode(&bits, &root).unwrap(), "abab");
/// ```
pub fn decode(bits: &BitVec, root: &HuffmanNode) -> Result<String> {
    if let HuffmanNode::Leaf { symbol, .. } = root {
        let mut text = String::with_capacity(bits.len());
        for bit in bits.iter() {
            if bit {
                return Err(Error::MalformedStream(
                    "unexpected 1 bit for a single-symbol tree".into(),
                ));
            }
            text.push(*symbol);
        }
        return Ok(text);
    }

    let mut text = String::new();
    let mut cursor = root;
    for bit in bits.iter() {
        cursor = cursor.child(bit).ok_or_else(|| {
            Error::MalformedStream("descended past a leaf".into())
        })?;
        if let HuffmanNode::Leaf { symbol, .. } = cursor {
            text.push(*symbol);
            cursor = root;
        }
    }

    // A well-formed stream ends exactly at a symbol boundary.
    if !std::ptr::eq(cursor, root) {
        return Err(Error::MalformedStream(
            "stream exhausted mid-symbol".into(),
        ));
    }

    Ok(text)
}
