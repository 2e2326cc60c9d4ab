use super::arena::MapTree;

/// Compute aggregated weights for all nodes (bottom-up).
/// After this, each branch's `subtree_weight` equals the sum of all
/// descendant leaf weights, and each leaf's equals its own coerced weight.
/// Safe to call repeatedly; the result only depends on the raw fields.
/// Returns the root's aggregated weight.
pub fn aggregate_weights(tree: &mut MapTree) -> f64 {
    // Process nodes in reverse order (children before parents) since
    // children always have higher indices than their parents in the arena.
    // This is guaranteed by the add_child insertion order.
    let len = tree.nodes.len();
    for i in (0..len).rev() {
        let total = if tree.nodes[i].children.is_empty() {
            leaf_weight(tree.nodes[i].weight, tree.nodes[i].size)
        } else {
            tree.nodes[i]
                .children
                .iter()
                .map(|c| tree.nodes[c.index()].subtree_weight)
                .sum()
        };
        tree.nodes[i].subtree_weight = total;
    }
    tree.nodes[tree.root.index()].subtree_weight
}

/// Coerce a leaf's raw weight: `weight` wins over `size`; absent,
/// non-finite, and negative values all count as 0.
fn leaf_weight(weight: Option<f64>, size: Option<f64>) -> f64 {
    let raw = weight.or(size).unwrap_or(0.0);
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;
    use crate::tree::RawNode;

    fn leaf(label: &str, weight: f64) -> RawNode {
        RawNode {
            label: label.into(),
            weight: Some(weight),
            ..RawNode::default()
        }
    }

    fn branch(label: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            label: label.into(),
            children: Some(children),
            ..RawNode::default()
        }
    }

    #[test]
    fn branch_weight_is_sum_of_leaves() {
        let raw = branch(
            "root",
            vec![
                branch("a", vec![leaf("a1", 10.0), leaf("a2", 20.0)]),
                leaf("b", 5.0),
            ],
        );
        let mut tree = build_tree(&raw);
        let total = aggregate_weights(&mut tree);
        assert_eq!(total, 35.0);
        assert_eq!(tree.get(tree.root).subtree_weight, 35.0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let raw = branch("root", vec![leaf("a", 3.0), leaf("b", 7.0)]);
        let mut tree = build_tree(&raw);
        let first = aggregate_weights(&mut tree);
        let second = aggregate_weights(&mut tree);
        assert_eq!(first, second);
        let weights: Vec<f64> = tree.nodes.iter().map(|n| n.subtree_weight).collect();
        aggregate_weights(&mut tree);
        let again: Vec<f64> = tree.nodes.iter().map(|n| n.subtree_weight).collect();
        assert_eq!(weights, again);
    }

    #[test]
    fn negative_and_missing_weights_count_as_zero() {
        let raw = branch(
            "root",
            vec![
                leaf("neg", -40.0),
                RawNode {
                    label: "none".into(),
                    ..RawNode::default()
                },
                leaf("ok", 12.0),
            ],
        );
        let mut tree = build_tree(&raw);
        assert_eq!(aggregate_weights(&mut tree), 12.0);
    }

    #[test]
    fn size_is_consulted_when_weight_is_absent() {
        let raw = branch(
            "root",
            vec![RawNode {
                label: "sized".into(),
                size: Some(8.0),
                ..RawNode::default()
            }],
        );
        let mut tree = build_tree(&raw);
        assert_eq!(aggregate_weights(&mut tree), 8.0);
    }

    #[test]
    fn branch_raw_weight_is_ignored() {
        let raw = RawNode {
            label: "root".into(),
            weight: Some(999.0),
            children: Some(vec![leaf("a", 1.0)]),
            ..RawNode::default()
        };
        let mut tree = build_tree(&raw);
        assert_eq!(aggregate_weights(&mut tree), 1.0);
    }
}
