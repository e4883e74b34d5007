//! Huffman decoding: bit stream back to symbol sequence.
//!
//! The decoder never needs the code table; it walks the tree directly,
//! descending left on `0` and right on `1` and emitting a symbol each time
//! a leaf is reached. Because variable-length prefix codes delimit symbols
//! but not the trailing repeat count of the degenerate single-symbol case,
//! the original symbol count travels with the stream and bounds the walk.

use crate::bitstream::BitVec;
use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Decode `symbol_count` symbols from `stream` using `tree`.
///
/// Fails with [`HuffmanError::TruncatedStream`] if the stream runs out of
/// bits first; a partial result is never returned. Bits past the last
/// decoded symbol are ignored.
///
/// A tree whose root is a lone leaf has no internal node to descend into;
/// its single symbol is emitted `symbol_count` times, consuming one bit per
/// emission to mirror the encoder's fixed one-bit code.
pub fn decode(tree: &HuffmanTree, stream: &BitVec, symbol_count: usize) -> Result<Vec<u8>> {
    if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
        if stream.len() < symbol_count {
            return Err(HuffmanError::TruncatedStream {
                decoded: stream.len(),
                expected: symbol_count,
            });
        }
        return Ok(vec![*symbol; symbol_count]);
    }

    let mut output = Vec::with_capacity(symbol_count);
    let mut bits = stream.iter();

    while output.len() < symbol_count {
        let mut node = tree.root();
        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    output.push(*symbol);
                    break;
                }
                HuffmanNode::Internal { left, right, .. } => match bits.next() {
                    Some(false) => node = left,
                    Some(true) => node = right,
                    None => {
                        return Err(HuffmanError::TruncatedStream {
                            decoded: output.len(),
                            expected: symbol_count,
                        });
                    }
                },
            }
        }
    }

    Ok(output)
}
