//! Symbol frequency counting.

use std::collections::HashMap;

/// Occurrence counts per distinct symbol of an input.
///
/// Holds exactly one entry per symbol that appears in the input; the sum of
/// all counts equals the input length. Built once and consumed by
/// [`HuffmanTree::build`](crate::HuffmanTree::build).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<u8, u64>,
}

impl FrequencyTable {
    /// Tally occurrence counts over `input`. Empty input yields an empty table.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut counts = HashMap::new();
        for &symbol in input {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The count for `symbol`, if it occurred.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Sum of all counts; equals the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(symbol, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
