use crate::tree::arena::{MapTree, NodeId};

/// Information to display in the tooltip when hovering over a node.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInfo {
    pub label: String,
    pub full_path: String,
    pub weight_display: String,
    pub change: Option<f64>,
    pub value: Option<f64>,
    pub is_branch: bool,
    pub child_count: Option<usize>,
}

/// Build tooltip info for a node.
pub fn build_tooltip(tree: &MapTree, node_id: NodeId) -> TooltipInfo {
    let node = tree.get(node_id);
    let is_branch = node.is_branch();
    TooltipInfo {
        label: node.label.to_string(),
        full_path: build_path(tree, node_id),
        weight_display: format_weight(node.subtree_weight),
        change: node.change,
        value: node.value,
        is_branch,
        child_count: if is_branch {
            Some(node.children.len())
        } else {
            None
        },
    }
}

/// Format a lines-of-code count for display.
pub fn format_weight(weight: f64) -> String {
    let n = weight.max(0.0).round() as u64;
    if n >= 1_000_000 {
        format!("{:.2}M LOC", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}k LOC", n as f64 / 1_000.0)
    } else {
        format!("{} LOC", n)
    }
}

/// Full path of a node: the stable `path` when the data carries one,
/// otherwise labels joined from the root down.
pub fn build_path(tree: &MapTree, node_id: NodeId) -> String {
    if let Some(path) = tree.get(node_id).path.as_ref() {
        return path.to_string();
    }

    let mut parts = Vec::new();
    let mut current = Some(node_id);
    while let Some(id) = current {
        let node = tree.get(id);
        parts.push(node.label.to_string());
        current = node.parent;
    }
    parts.reverse();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_tree;
    use crate::tree::build_tree;

    fn sample() -> MapTree {
        build_tree(
            &parse_tree(
                r#"{"label":"root","children":[
                    {"label":"src","children":[
                        {"label":"main.c","weight":1234,"change":-12,"value":-1.0}
                    ]}
                ]}"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn leaf_tooltip_carries_the_metrics() {
        let tree = sample();
        let src = tree.children(tree.root)[0];
        let leaf = tree.children(src)[0];
        let info = build_tooltip(&tree, leaf);
        assert_eq!(info.label, "main.c");
        assert_eq!(info.full_path, "root/src/main.c");
        assert_eq!(info.weight_display, "1234 LOC");
        assert_eq!(info.change, Some(-12.0));
        assert!(!info.is_branch);
        assert_eq!(info.child_count, None);
    }

    #[test]
    fn branch_tooltip_counts_children() {
        let tree = sample();
        let src = tree.children(tree.root)[0];
        let info = build_tooltip(&tree, src);
        assert!(info.is_branch);
        assert_eq!(info.child_count, Some(1));
        assert_eq!(info.weight_display, "1234 LOC");
    }

    #[test]
    fn explicit_paths_win_over_joined_labels() {
        let tree = build_tree(
            &parse_tree(r#"{"label":"root","children":[{"label":"a","path":"lib/a.rs","weight":1}]}"#)
                .unwrap(),
        );
        let leaf = tree.children(tree.root)[0];
        assert_eq!(build_path(&tree, leaf), "lib/a.rs");
    }

    #[test]
    fn weight_formatting_tiers() {
        assert_eq!(format_weight(0.0), "0 LOC");
        assert_eq!(format_weight(9_999.0), "9999 LOC");
        assert_eq!(format_weight(12_345.0), "12.3k LOC");
        assert_eq!(format_weight(2_500_000.0), "2.50M LOC");
    }
}
