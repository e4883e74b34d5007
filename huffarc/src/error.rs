//! Huffman-specific error types.

use thiserror::Error;

/// Errors raised by Huffman tree construction and the codec.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols to encode; a tree over an empty alphabet is undefined.
    #[error("empty input: no symbols to build a Huffman tree from")]
    EmptyInput,

    /// A symbol in the encode input has no entry in the code table.
    /// Indicates the table was derived from different input.
    #[error("symbol {symbol:#04x} has no code table entry")]
    UnknownSymbol {
        /// The symbol missing from the table.
        symbol: u8,
    },

    /// The encoded stream ran out of bits before the expected number of
    /// symbols was produced; the stream is corrupted or mismatched.
    #[error("encoded stream exhausted after {decoded} of {expected} symbols")]
    TruncatedStream {
        /// Symbols successfully decoded before exhaustion.
        decoded: usize,
        /// Symbols the caller expected.
        expected: usize,
    },

    /// A character other than `'0'` or `'1'` in a textual bit string.
    #[error("invalid bit character {ch:?} at position {position}")]
    InvalidBitChar {
        /// The offending character.
        ch: char,
        /// Character offset in the input string.
        position: usize,
    },
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
