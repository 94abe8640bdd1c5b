mod error;

pub use error::CodeError;

use std::collections::BTreeMap;

/// Occurrence count of a symbol. A weight of 0 is valid input, the symbol
/// still takes part in tree construction like any other.
pub type Weight = u64;

/// creates a table with the counts of each symbol
#[inline]
pub fn count_symbols<S, I>(input: I) -> BTreeMap<S, Weight>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    let mut counts = BTreeMap::new();
    for symbol in input {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}

/// creates a table with the counts of each byte
#[inline]
pub fn count_bytes(input: &[u8]) -> BTreeMap<u8, Weight> {
    count_symbols(input.iter().copied())
}
