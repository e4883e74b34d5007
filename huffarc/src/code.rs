//! Prefix code assignment.
//!
//! Walks a [`HuffmanTree`] depth-first, accumulating the root-to-leaf path as
//! a bit sequence (`0` descending left, `1` descending right), and records
//! the path as each leaf symbol's code. Codes produced this way are
//! prefix-free by construction: a symbol's code ends at a leaf, so no code
//! can continue into another.

use crate::bitstream::BitVec;
use crate::tree::{HuffmanNode, HuffmanTree};
use std::collections::HashMap;

/// Mapping from symbol to its prefix code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<u8, BitVec>,
}

impl CodeTable {
    /// Assign codes to every leaf of `tree`.
    ///
    /// When the root is itself a leaf (single-symbol alphabet) the
    /// accumulated path is empty, and an empty code would make any number
    /// of occurrences encode to the same empty stream. That symbol gets
    /// the fixed one-bit code `0` instead; the decoder applies the matching
    /// rule.
    pub fn assign(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        match tree.root() {
            HuffmanNode::Leaf { symbol, .. } => {
                let mut code = BitVec::new();
                code.push(false);
                codes.insert(*symbol, code);
            }
            root => {
                let mut path = BitVec::new();
                Self::walk(root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    fn walk(node: &HuffmanNode, path: &mut BitVec, codes: &mut HashMap<u8, BitVec>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, path.clone());
            }
            HuffmanNode::Internal { left, right, .. } => {
                path.push(false);
                Self::walk(left, path, codes);
                path.pop();

                path.push(true);
                Self::walk(right, path, codes);
                path.pop();
            }
        }
    }

    /// The code for `symbol`, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&BitVec> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitVec)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn table_for(input: &[u8]) -> CodeTable {
        let freq = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::build(&freq).unwrap();
        CodeTable::assign(&tree)
    }

    #[test]
    fn test_every_symbol_gets_a_code() {
        let codes = table_for(b"abracadabra");
        assert_eq!(codes.len(), 5);
        for symbol in [b'a', b'b', b'r', b'c', b'd'] {
            assert!(codes.get(symbol).is_some());
        }
        assert!(codes.get(b'z').is_none());
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let codes = table_for(b"abracadabra");
        let all: Vec<&BitVec> = codes.iter().map(|(_, code)| code).collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i == j {
                    continue;
                }
                let is_prefix = a.len() <= b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x == y);
                assert!(!is_prefix, "code {} is a prefix of {}", a, b);
            }
        }
    }

    #[test]
    fn test_more_frequent_symbols_get_shorter_codes() {
        let codes = table_for(b"abracadabra");
        // 'a' occurs 5 times out of 11; its code must be no longer than the
        // singletons' codes.
        let a = codes.get(b'a').unwrap().len();
        let c = codes.get(b'c').unwrap().len();
        let d = codes.get(b'd').unwrap().len();
        assert!(a <= c);
        assert!(a <= d);
    }

    #[test]
    fn test_lone_leaf_gets_one_bit_code() {
        let codes = table_for(b"aaaa");
        let code = codes.get(b'a').unwrap();
        assert_eq!(code.to_string(), "0");
    }

    #[test]
    fn test_two_symbol_codes() {
        // 'a' is the left child (see tree tie-break), so it reads as "0".
        let codes = table_for(b"ab");
        assert_eq!(codes.get(b'a').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'b').unwrap().to_string(), "1");
    }
}
