use crate::tree::CodeTree;
use std::fmt;

/// Renders the tree as indented text, one node per line, with the bit taken
/// on the edge leading into each node.
pub fn render_plan_to<S: fmt::Debug, W: fmt::Write>(
    tree: &CodeTree<S>,
    output: &mut W,
) -> fmt::Result {
    let mut stack: Vec<(&CodeTree<S>, usize, Option<u8>)> = vec![(tree, 0, None)];
    while let Some((node, depth, transition)) = stack.pop() {
        let indent = "  ".repeat(depth);
        let label = match transition {
            Some(bit) => format!("{} -> ", bit),
            None => String::new(),
        };
        match node {
            CodeTree::Leaf { symbol, weight } => {
                writeln!(output, "{}{}Leaf {:?} [weight: {}]", indent, label, symbol, weight)?;
            }
            CodeTree::Internal {
                weight,
                left,
                right,
                ..
            } => {
                writeln!(output, "{}{}Internal [weight: {}]", indent, label, weight)?;
                stack.push((right, depth + 1, Some(1)));
                stack.push((left, depth + 1, Some(0)));
            }
        }
    }
    Ok(())
}
