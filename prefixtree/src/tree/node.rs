use crate::tree::render_tree::render_plan_to;
use common::Weight;
use core::cmp::Ordering;
use std::fmt;

/// One tree in the forest the builder merges down to a single root.
///
/// A node is either a leaf carrying one symbol or an internal node that
/// exclusively owns exactly two children, there is no one-child shape.
/// `min_symbol` is the smallest symbol in the subtree and is used only to
/// break weight ties, never to shape codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTree<S> {
    Leaf {
        symbol: S,
        weight: Weight,
    },
    Internal {
        weight: Weight,
        min_symbol: S,
        left: Box<CodeTree<S>>,
        right: Box<CodeTree<S>>,
    },
}

impl<S: Ord + Clone> CodeTree<S> {
    pub fn leaf(symbol: S, weight: Weight) -> Self {
        CodeTree::Leaf { symbol, weight }
    }

    /// Merges two trees into a new internal node, consuming both operands.
    ///
    /// The lower-weight operand becomes the left child. On a weight tie the
    /// first operand wins the left slot, so callers that extract minima in
    /// order get reproducible tree shapes.
    pub fn merge(first: Self, second: Self) -> Self {
        let weight = first.weight() + second.weight();
        let min_symbol = first.min_symbol().min(second.min_symbol()).clone();
        let (left, right) = if first.weight() > second.weight() {
            (second, first)
        } else {
            (first, second)
        };
        CodeTree::Internal {
            weight,
            min_symbol,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl<S> CodeTree<S> {
    pub fn weight(&self) -> Weight {
        match self {
            CodeTree::Leaf { weight, .. } => *weight,
            CodeTree::Internal { weight, .. } => *weight,
        }
    }

    /// the representative symbol of the subtree, used for tie-breaking
    pub fn min_symbol(&self) -> &S {
        match self {
            CodeTree::Leaf { symbol, .. } => symbol,
            CodeTree::Internal { min_symbol, .. } => min_symbol,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeTree::Leaf { .. })
    }

    /// number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let CodeTree::Internal { left, right, .. } = node {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }

    /// returns all (symbol, weight) leaves in stable left-to-right tree order
    pub fn leaves(&self) -> Vec<(&S, Weight)> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                CodeTree::Leaf { symbol, weight } => leaves.push((symbol, *weight)),
                CodeTree::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        leaves
    }

    /// Total encoded size in bits, sum of weight times code length over all
    /// leaves. A lone leaf still costs one bit per occurrence, matching the
    /// code book's single-symbol policy.
    pub fn encoded_bits(&self) -> u64 {
        let mut size_in_bits = 0;
        let mut stack = vec![(self, 0_u64)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                CodeTree::Leaf { weight, .. } => size_in_bits += weight * depth.max(1),
                CodeTree::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        size_in_bits
    }
}

// The heap depends on `Ord`. The order must stay pure, tie logging like the
// usual textbook demo would make comparisons observable side effects.
impl<S: Ord> Ord for CodeTree<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| self.min_symbol().cmp(other.min_symbol()))
    }
}

impl<S: Ord> PartialOrd for CodeTree<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: fmt::Debug> fmt::Display for CodeTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_plan_to(self, f)
    }
}
