/*!
prefixtree builds optimal prefix-free binary codes (Huffman coding) for an
arbitrary symbol alphabet.

The crate is split along the construction pipeline: a weight-ordered
[`MinHeap`] feeds the greedy merge loop in [`tree::build_tree`], which
produces a single [`CodeTree`]; one traversal of that tree derives the
[`CodeBook`] mapping each symbol to its bit string. The heap and the merge
share one total order (weight ascending, then representative symbol
ascending), so equal inputs always produce equal trees.
*/

pub mod codebook;
pub mod heap;
pub mod tree;

pub use codebook::{assert_prefix_free, Code, CodeBook};
pub use heap::MinHeap;
pub use tree::{build_tree, CodeTree};
