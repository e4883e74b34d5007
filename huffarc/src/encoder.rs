//! Huffman encoding: symbol sequence to bit stream.

use crate::bitstream::BitVec;
use crate::code::CodeTable;
use crate::error::{HuffmanError, Result};

/// Encode `input` by concatenating each symbol's code, in input order.
///
/// Fails with [`HuffmanError::UnknownSymbol`] if a symbol has no entry in
/// `codes`; that can only happen when the table was derived from different
/// input, and silently skipping or substituting would corrupt the stream.
pub fn encode(input: &[u8], codes: &CodeTable) -> Result<BitVec> {
    let mut stream = BitVec::with_capacity(input.len());
    for &symbol in input {
        let code = codes
            .get(symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol })?;
        stream.extend_from(code);
    }
    Ok(stream)
}
