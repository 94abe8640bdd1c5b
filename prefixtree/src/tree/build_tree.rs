use crate::heap::MinHeap;
use crate::tree::CodeTree;
use common::Weight;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Builds the optimal prefix-code tree for the given weight map.
///
/// Seeds the heap with one leaf per symbol, then repeatedly merges the two
/// lowest-weight trees until one remains. Each iteration shrinks the heap by
/// exactly one, so the loop terminates after n - 1 merges.
///
/// Returns `None` for an empty alphabet, a lone leaf for a single symbol.
/// Zero-weight symbols keep their leaf, callers that want them gone filter
/// the map before building.
pub fn build_tree<S: Ord + Clone>(weights: &BTreeMap<S, Weight>) -> Option<CodeTree<S>> {
    if weights.is_empty() {
        return None;
    }
    let leaves: Vec<CodeTree<S>> = weights
        .iter()
        .map(|(symbol, weight)| CodeTree::leaf(symbol.clone(), *weight))
        .collect();
    let mut heap = MinHeap::from_vec(leaves);
    debug!("seeded heap with {} leaves", heap.len());

    while heap.len() > 1 {
        let first = heap.extract_min().expect("heap holds at least two trees");
        let second = heap.extract_min().expect("heap holds at least two trees");
        trace!(
            "merging subtrees with weights {} and {}",
            first.weight(),
            second.weight()
        );
        heap.insert(CodeTree::merge(first, second));
    }

    heap.extract_min().ok()
}
