//! Growable bit sequences for variable-length codes.
//!
//! Huffman codes and the encoded stream they concatenate into are sequences
//! of individual bits, not bytes. [`BitVec`] stores such a sequence packed
//! MSB-first, so the first bit pushed occupies the most significant bit of
//! the first byte and the textual rendering reads left to right in push
//! order.
//!
//! # Example
//!
//! ```
//! use huffarc::BitVec;
//!
//! let mut bits = BitVec::new();
//! bits.push(false);
//! bits.push(true);
//! bits.push(true);
//! assert_eq!(bits.to_string(), "011");
//! assert_eq!(bits.len(), 3);
//! ```

use crate::error::{HuffmanError, Result};
use std::fmt;
use std::str::FromStr;

/// A packed, growable sequence of bits (MSB-first within each byte).
///
/// Unused trailing bits of the last byte are always zero, so two `BitVec`s
/// holding the same bit sequence compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVec {
    /// Packed storage, MSB-first.
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitVec {
    /// Create an empty bit sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit sequence with storage for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence contains no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes the packed representation occupies.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// The packed bytes; the last byte is zero-padded in its low bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let byte = self.len / 8;
            self.bytes[byte] |= 1 << (7 - (self.len % 8));
        }
        self.len += 1;
    }

    /// Remove and return the last bit, or `None` if empty.
    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte = self.len / 8;
        let mask = 1u8 << (7 - (self.len % 8));
        let bit = self.bytes[byte] & mask != 0;
        // Clear the slot so padding bits stay zero.
        self.bytes[byte] &= !mask;
        if self.len % 8 == 0 {
            self.bytes.pop();
        }
        Some(bit)
    }

    /// The bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let mask = 1u8 << (7 - (index % 8));
        Some(self.bytes[index / 8] & mask != 0)
    }

    /// Append every bit of `other`, in order.
    pub fn extend_from(&mut self, other: &BitVec) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> Bits<'_> {
        Bits { vec: self, pos: 0 }
    }

    /// Truncate the sequence to at most `bits` bits.
    pub fn truncate(&mut self, bits: usize) {
        while self.len > bits {
            self.pop();
        }
    }
}

/// Iterator over the bits of a [`BitVec`].
#[derive(Debug)]
pub struct Bits<'a> {
    vec: &'a BitVec,
    pos: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.vec.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitVec {
    type Err = HuffmanError;

    /// Parse a string of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(HuffmanError::InvalidBitChar { ch, position }),
            }
        }
        Ok(bits)
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitVec::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}
