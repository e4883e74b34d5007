//! # Huffarc: Pure Rust Static Huffman Coding
//!
//! This crate implements classic static Huffman coding over a finite,
//! fully-buffered input: it counts symbol frequencies, builds an optimal
//! prefix-free binary code from them, encodes the input into a bit stream,
//! and decodes that stream back to the original symbols.
//!
//! ## Pipeline
//!
//! Data flows strictly one way:
//!
//! ```text
//! input bytes -> FrequencyTable -> HuffmanTree -> CodeTable -> BitVec
//!                                       |                        |
//!                                       +------- decode ---------+
//! ```
//!
//! Each stage is built once and read-only afterwards; the decoder walks the
//! tree directly and never needs the code table.
//!
//! ## Session metadata
//!
//! A prefix-coded bit stream delimits its symbols but cannot distinguish
//! trailing repetitions of a single-symbol alphabet from padding, so the
//! tree and the original symbol count must accompany the stream. The
//! [`Encoded`] session type carries all three.
//!
//! ## Example
//!
//! ```rust
//! use huffarc::Encoded;
//!
//! let encoded = Encoded::from_bytes(b"abracadabra").unwrap();
//! assert_eq!(encoded.symbol_count(), 11);
//! assert_eq!(encoded.decode().unwrap(), b"abracadabra");
//! ```
//!
//! The stages compose individually as well:
//!
//! ```rust
//! use huffarc::{CodeTable, FrequencyTable, HuffmanTree, decode, encode};
//!
//! let input = b"ab";
//! let freq = FrequencyTable::from_bytes(input);
//! let tree = HuffmanTree::build(&freq)?;
//! let codes = CodeTable::assign(&tree);
//!
//! let stream = encode(input, &codes)?;
//! assert_eq!(stream.to_string(), "01");
//! assert_eq!(decode(&tree, &stream, input.len())?, input);
//! # Ok::<(), huffarc::HuffmanError>(())
//! ```
//!
//! ## Degenerate single-symbol input
//!
//! An input like `"aaaa"` builds a tree that is a single leaf, whose
//! root-to-leaf path is empty. An empty code would make every repeat count
//! encode to the same empty stream, so the lone symbol is assigned the fixed
//! one-bit code `0` and the decoder consumes one bit per emitted repetition.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream;
mod code;
mod decoder;
mod encoder;
mod error;
mod freq;
mod tree;

pub use bitstream::{BitVec, Bits};
pub use code::CodeTable;
pub use decoder::decode;
pub use encoder::encode;
pub use error::{HuffmanError, Result};
pub use freq::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};

/// An encoding session: the bit stream plus the metadata decoding needs.
///
/// Bundles the tree, the encoded stream, and the original symbol count, the
/// three artifacts that must travel together for decoding to be well-defined.
#[derive(Debug, Clone)]
pub struct Encoded {
    tree: HuffmanTree,
    stream: BitVec,
    symbol_count: usize,
}

impl Encoded {
    /// Run the full encoding pipeline over `input`.
    ///
    /// Fails with [`HuffmanError::EmptyInput`] for empty input; there is
    /// nothing meaningful to encode.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let freq = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::build(&freq)?;
        let codes = CodeTable::assign(&tree);
        let stream = encode(input, &codes)?;
        Ok(Self {
            tree,
            stream,
            symbol_count: input.len(),
        })
    }

    /// The Huffman tree the stream was encoded against.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The encoded bit stream.
    pub fn stream(&self) -> &BitVec {
        &self.stream
    }

    /// Number of symbols in the original input.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Size of the packed stream in bytes.
    pub fn compressed_len(&self) -> usize {
        self.stream.byte_len()
    }

    /// Decode the stream back to the original symbol sequence.
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode(&self.tree, &self.stream, self.symbol_count)
    }
}
