//! Character-level Huffman coding: build a prefix-free binary code from the
//! symbol frequencies of a text source, then compress and losslessly
//! restore it.
//!
//! The pipeline has three stages: frequency analysis ([`count_frequencies`]),
//! greedy priority-queue tree construction ([`build_tree`]) and the derived
//! encode/decode transformation ([`generate_codes`], [`encode`], [`decode`]).
//! The [`Huffman`] facade runs the build stages once and holds the resulting
//! tree and code table read-only for the rest of the session.
//!
//! ## Example
//!
//! ```rust
//! use huffcode::Huffman;
//!
//! let source = "it was the best of times, it was the worst of times";
//!
//! let huffman = Huffman::from_text(source).unwrap();
//! let bits = huffman.encode(source).unwrap();
//! let restored = huffman.decode(&bits).unwrap();
//!
//! assert!(bits.len() < source.len() * 8);
//! assert_eq!(restored, source);
//! ```
//!
//! Encoded streams can be persisted either packed ([`pack`]/[`unpack`]) or
//! as legacy ASCII `'0'`/`'1'` text ([`to_bit_text`]/[`from_bit_text`]);
//! [`compression_ratio`] reports the encoded bit count against the bit size
//! of the original.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod code;
mod decode;
mod error;
mod freq;
mod stream;
mod tree;

use bit_vec::BitVec;

pub use code::{encode, generate_codes, CodeTable};
pub use decode::decode;
pub use error::{Error, Result};
pub use freq::{count_frequencies, FrequencyTable};
pub use stream::{compression_ratio, from_bit_text, pack, to_bit_text, unpack};
pub use tree::{build_tree, HuffmanNode};

/// A ready-to-use codec for one source alphabet.
///
/// Builds the tree and code table once; both are immutable afterwards, so a
/// caller may run independent encode and decode sessions against the same
/// instance, concurrently if it wishes.
///
/// - Compress with [`Self::encode`]
/// - Decompress with [`Self::decode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Huffman {
    root: HuffmanNode,
    codes: CodeTable,
}

impl Huffman {
    /// Builds the codec from the symbol frequencies of `text`.
    ///
    /// Fails with [`Error::EmptyAlphabet`] when `text` is empty.
    ///
    /// ```rust
    /// let huffman = huffcode::Huffman::from_text("abracadabra").unwrap();
    /// assert_eq!(huffman.codes().len(), 5);
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(&count_frequencies(text))
    }

    /// Builds the codec from an already-computed frequency table.
    ///
    /// ```rust
    /// let freq = huffcode::count_frequencies("abracadabra");
    /// let huffman = huffcode::Huffman::from_frequencies(&freq).unwrap();
    /// assert_eq!(huffman.root().weight(), 11);
    /// ```
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        let root = build_tree(freq)?;
        let codes = generate_codes(&root);
        Ok(Self { root, codes })
    }

    /// The root of the Huffman tree, for read-only consumers such as a
    /// visualization layer.
    ///
    /// ```rust
    /// let huffman = huffcode::Huffman::from_text("aaaa").unwrap();
    /// assert!(huffman.root().is_leaf());
    /// ```
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// The derived code table, for read-only consumers.
    ///
    /// ```rust
    /// let huffman = huffcode::Huffman::from_text("ab").unwrap();
    /// assert_eq!(huffman.codes().len(), 2);
    /// ```
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Encodes `text` against this codec's code table. See [`encode`].
    ///
    /// ```rust
    /// let huffman = huffcode::Huffman::from_text("abab").unwrap();
    /// assert_eq!(huffman.encode("abab").unwrap().len(), 4);
    /// ```
    pub fn encode(&self, text: &str) -> Result<BitVec> {
        encode(text, &self.codes)
    }

    /// Decodes `bits` against this codec's tree. See [`decode`].
    ///
    /// ```rust
    /// let huffman = huffcode::Huffman::from_text("abab").unwrap();
    /// let bits = huffman.encode("ab").unwrap();
    /// assert_eq!(huffman.decode(&bits).unwrap(), "ab");
    /// ```
    pub fn decode(&self, bits: &BitVec) -> Result<String> {
        decode(bits, &self.root)
    }

    /// One line per symbol, `{symbol:?}  weight  code`, sorted by code
    /// length then symbol. A textual stand-in for a graphical code-table
    /// view.
    ///
    /// ```rust
    /// let huffman = huffcode::Huffman::from_text("aabbbcc").unwrap();
    /// let listing = huffman.code_listing();
    /// assert!(listing.lines().next().unwrap().starts_with("'b'"));
    /// ```
    pub fn code_listing(&self) -> String {
        let mut entries = self.root.leaves();
        entries.sort_by_key(|&(symbol, _)| (self.codes[&symbol].len(), symbol));

        let mut out = String::new();
        for (symbol, weight) in entries {
            out.push_str(&format!(
                "{symbol:?}  {weight}  {}\n",
                to_bit_text(&self.codes[&symbol])
            ));
        }
        out
    }
}
