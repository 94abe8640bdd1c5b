use crate::tree::CodeTree;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// A prefix code for one symbol, an ordered bit sequence built from the
/// root-to-leaf path (0 on left steps, 1 on right steps).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<u8>,
}

impl Code {
    pub fn from_bits(bits: &[u8]) -> Self {
        debug_assert!(bits.iter().all(|bit| *bit <= 1));
        Code {
            bits: bits.to_vec(),
        }
    }

    fn push(&mut self, bit: u8) {
        self.bits.push(bit);
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() <= other.len() && self.bits[..] == other.bits[..self.len()]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// The code table produced by one traversal of the final tree, mapping each
/// symbol to its bit string. Immutable after construction and freely
/// shareable for lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook<S> {
    codes: BTreeMap<S, Code>,
}

impl<S: Ord + Clone> CodeBook<S> {
    pub fn new() -> Self {
        CodeBook {
            codes: BTreeMap::new(),
        }
    }

    /// Derives the code for every symbol in one depth-first traversal.
    ///
    /// Re-running this on the same tree always yields the same table. The
    /// traversal is iterative, depth is bounded by the alphabet size but a
    /// degenerate weight distribution makes it linear in it.
    pub fn from_tree(tree: &CodeTree<S>) -> Self {
        let mut codes = BTreeMap::new();

        // A lone leaf never passes a branch point, so the naive traversal
        // would hand out a zero-length code. The single symbol gets the
        // one-bit code 0 instead.
        if let CodeTree::Leaf { symbol, .. } = tree {
            codes.insert(symbol.clone(), Code::from_bits(&[0]));
            return CodeBook { codes };
        }

        let mut stack: Vec<(&CodeTree<S>, Code)> = vec![(tree, Code::default())];
        while let Some((node, code)) = stack.pop() {
            match node {
                CodeTree::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), code);
                }
                CodeTree::Internal { left, right, .. } => {
                    let mut right_code = code.clone();
                    right_code.push(1);
                    let mut left_code = code;
                    left_code.push(0);
                    stack.push((right, right_code));
                    stack.push((left, left_code));
                }
            }
        }
        debug!("generated code book with {} entries", codes.len());
        CodeBook { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// yields (symbol, code) pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Ord + Clone> Default for CodeBook<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Display + Ord + Clone> fmt::Display for CodeBook<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{} {}", symbol, code)?;
        }
        Ok(())
    }
}

/// will validate that no code in the book is a prefix of another code.
/// This validation is rather slow and should not be used in a regular encoding execution.
pub fn assert_prefix_free<S: Ord + Clone>(book: &CodeBook<S>) {
    for (symbol, code) in book.iter() {
        for (other_symbol, other_code) in book.iter() {
            if symbol == other_symbol {
                continue;
            }
            if code.is_prefix_of(other_code) {
                panic!(
                    "invalid prefix detected between {} and {}",
                    code, other_code
                );
            }
        }
    }
}
