/*!
huffcode builds an optimal prefix-free binary code (Huffman coding) from
per-symbol occurrence counts and exposes encoding and decoding over the
resulting code book.

The heavy lifting lives in the `prefixtree` member crate (min-heap, tree
merge, code generation); this crate validates caller input, drives the
build and offers the sequence-level encode/decode wrappers.

```
use huffcode::{count_bytes, HuffmanCode};

let weights = count_bytes(b"abracadabra");
let huffman = HuffmanCode::from_weights(&weights);
let bits = huffman.encode(b"abra").unwrap();
assert_eq!(huffman.decode(&bits).unwrap(), b"abra");
```
*/

pub mod decode;
pub mod encode;

use log::debug;
use std::collections::BTreeMap;
use std::fmt;

pub use common::{count_bytes, count_symbols, CodeError, Weight};
pub use prefixtree::{assert_prefix_free, build_tree, Code, CodeBook, CodeTree, MinHeap};

/// A built Huffman code: the final tree plus the code book derived from it.
///
/// Construction is single-threaded; afterwards the value is immutable and
/// can be shared freely for concurrent lookups.
#[derive(Debug, Clone)]
pub struct HuffmanCode<S: Ord + Clone> {
    tree: Option<CodeTree<S>>,
    book: CodeBook<S>,
}

impl<S: Ord + Clone> HuffmanCode<S> {
    /// Builds the code from signed occurrence counts.
    ///
    /// Rejects negative counts and duplicate symbols with
    /// [`CodeError::InvalidAlphabet`] before any construction happens.
    pub fn from_counts<I>(counts: I) -> Result<Self, CodeError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: fmt::Debug,
    {
        let mut weights = BTreeMap::new();
        for (symbol, count) in counts {
            if count < 0 {
                return Err(CodeError::InvalidAlphabet(format!(
                    "negative weight {} for symbol {:?}",
                    count, symbol
                )));
            }
            let key = symbol.clone();
            if weights.insert(symbol, count as Weight).is_some() {
                return Err(CodeError::InvalidAlphabet(format!(
                    "duplicate symbol {:?}",
                    key
                )));
            }
        }
        Ok(Self::from_weights(&weights))
    }

    /// Builds the code from a weight map. An empty map yields an empty code
    /// book, not an error.
    pub fn from_weights(weights: &BTreeMap<S, Weight>) -> Self {
        let tree = build_tree(weights);
        let book = match &tree {
            Some(tree) => CodeBook::from_tree(tree),
            None => CodeBook::new(),
        };
        debug!("built huffman code for {} symbols", book.len());
        HuffmanCode { tree, book }
    }

    /// read-only lookup from symbol to bit-string code
    pub fn code_book(&self) -> &CodeBook<S> {
        &self.book
    }

    /// the final merged tree, `None` for an empty alphabet
    pub fn tree(&self) -> Option<&CodeTree<S>> {
        self.tree.as_ref()
    }

    /// (symbol, weight) pairs in stable left-to-right tree order, for
    /// inspection and external printing
    pub fn symbol_weights(&self) -> Vec<(&S, Weight)> {
        match &self.tree {
            Some(tree) => tree.leaves(),
            None => Vec::new(),
        }
    }

    /// concatenates the codes of all input symbols into one bit sequence
    pub fn encode(&self, input: &[S]) -> Result<Vec<u8>, CodeError> {
        encode::encode_symbols(&self.book, input)
    }

    /// walks the tree bit-by-bit and reproduces the original symbol sequence
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<S>, CodeError> {
        match &self.tree {
            Some(tree) => decode::decode_bits(tree, bits),
            None if bits.is_empty() => Ok(Vec::new()),
            None => Err(CodeError::CorruptionDetected(
                "bit stream for an empty alphabet".to_string(),
            )),
        }
    }
}

impl<S: Ord + Clone + fmt::Display> fmt::Display for HuffmanCode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.book, f)
    }
}
