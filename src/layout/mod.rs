pub mod squarify;

use std::collections::HashMap;

use crate::tree::arena::{MapTree, NodeId};

use self::squarify::LayoutItem;

/// A positioned rectangle in the treemap, in absolute pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRect {
    pub node: NodeId,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub depth: u16,
}

/// The full layout result (rects + fast lookup).
#[derive(Debug)]
pub struct Layout {
    /// All visible rectangles. Index 0 is the current view root's backdrop;
    /// siblings precede their subtrees, so deeper rects come later.
    pub rects: Vec<LayoutRect>,
    /// node → index into `rects` (O(1) hover and tooltip lookup)
    pub node_to_rect: HashMap<NodeId, usize>,
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Minimum screen area (px²) before recursing into a branch interior
    pub min_area: f32,
    /// Horizontal inset of a branch interior (px, each side)
    pub padding: f32,
    /// Vertical space reserved for the branch label header (px)
    pub header_height: f32,
    /// Inset below a branch interior (px)
    pub bottom_inset: f32,
    /// Maximum recursion depth (safety + performance)
    pub max_depth: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_area: 1.0,
            padding: 4.0,
            header_height: 20.0,
            bottom_inset: 2.0,
            max_depth: 64,
        }
    }
}

/// Compute layout for any subtree (root can be any node for drill-down).
/// Expects `subtree_weight` to be up to date; the caller re-aggregates
/// before every draw cycle.
pub fn compute_layout(
    tree: &MapTree,
    root: NodeId,
    viewport_w: f32,
    viewport_h: f32,
    config: &LayoutConfig,
) -> Layout {
    let mut rects = Vec::with_capacity(tree.len().min(1024));
    let mut node_to_rect = HashMap::with_capacity(rects.capacity());

    rects.push(LayoutRect {
        node: root,
        x: 0.0,
        y: 0.0,
        w: viewport_w,
        h: viewport_h,
        depth: 0,
    });
    node_to_rect.insert(root, 0);

    tracing::debug!(
        "Laying out {} children of '{}' in {:.0}x{:.0} viewport",
        tree.children(root).len(),
        tree.get(root).label,
        viewport_w,
        viewport_h
    );

    layout_children(
        tree,
        root,
        0.0,
        0.0,
        viewport_w,
        viewport_h,
        0,
        config,
        &mut rects,
        &mut node_to_rect,
    );

    Layout { rects, node_to_rect }
}

/// Recursively lay out the children of `parent` into the given rectangle.
/// Zero-weight children are excluded; branch interiors recurse within an
/// inset sub-rectangle that leaves room for the label header.
fn layout_children(
    tree: &MapTree,
    parent: NodeId,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    depth: u16,
    config: &LayoutConfig,
    rects: &mut Vec<LayoutRect>,
    node_to_rect: &mut HashMap<NodeId, usize>,
) {
    if depth >= config.max_depth {
        return;
    }

    let items: Vec<LayoutItem> = tree
        .children(parent)
        .iter()
        .map(|&id| LayoutItem {
            node: id,
            weight: tree.get(id).subtree_weight,
        })
        .filter(|it| it.weight > 0.0)
        .collect();
    if items.is_empty() {
        return;
    }

    let positioned = squarify::layout(&items, x as f64, y as f64, w as f64, h as f64);

    for pos in positioned {
        let child_depth = depth + 1;
        let rect = LayoutRect {
            node: pos.node,
            x: pos.x as f32,
            y: pos.y as f32,
            w: pos.w as f32,
            h: pos.h as f32,
            depth: child_depth,
        };
        let idx = rects.len();
        rects.push(rect);
        node_to_rect.insert(pos.node, idx);

        if !tree.get(pos.node).is_branch() {
            continue;
        }
        if rect.w * rect.h < config.min_area {
            continue;
        }

        // Interior inset: side padding plus the label header on top.
        let inner_x = rect.x + config.padding;
        let inner_y = rect.y + config.header_height;
        let inner_w = rect.w - 2.0 * config.padding;
        let inner_h = rect.h - config.header_height - config.bottom_inset;
        if inner_w > 0.0 && inner_h > 0.0 {
            layout_children(
                tree,
                pos.node,
                inner_x,
                inner_y,
                inner_w,
                inner_h,
                child_depth,
                config,
                rects,
                node_to_rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_tree;
    use crate::tree::build_tree;

    #[test]
    fn sibling_rects_tile_the_viewport() {
        let raw = parse_tree(
            r#"{"label":"root","children":[
                {"label":"a","weight":30},
                {"label":"b","weight":70}
            ]}"#,
        )
        .unwrap();
        let tree = build_tree(&raw);
        let layout = compute_layout(&tree, tree.root, 100.0, 100.0, &LayoutConfig::default());
        // backdrop + two leaves
        assert_eq!(layout.rects.len(), 3);
        let area: f32 = layout.rects[1..].iter().map(|r| r.w * r.h).sum();
        assert!((area - 10_000.0).abs() < 0.5);
    }

    #[test]
    fn branch_interiors_nest_inside_their_parent() {
        let raw = parse_tree(
            r#"{"label":"root","children":[
                {"label":"dir","path":"dir/","children":[
                    {"label":"x","weight":60},
                    {"label":"y","weight":40}
                ]},
                {"label":"z","weight":100}
            ]}"#,
        )
        .unwrap();
        let tree = build_tree(&raw);
        let config = LayoutConfig::default();
        let layout = compute_layout(&tree, tree.root, 400.0, 300.0, &config);

        let dir_idx = layout
            .rects
            .iter()
            .position(|r| tree.get(r.node).label == "dir")
            .unwrap();
        let dir = layout.rects[dir_idx];
        for r in &layout.rects {
            if tree.get(r.node).label == "x" || tree.get(r.node).label == "y" {
                assert!(r.x >= dir.x + config.padding - 1e-3);
                assert!(r.y >= dir.y + config.header_height - 1e-3);
                assert!(r.x + r.w <= dir.x + dir.w - config.padding + 1e-3);
                assert!(r.y + r.h <= dir.y + dir.h - config.bottom_inset + 1e-3);
                assert_eq!(r.depth, dir.depth + 1);
            }
        }
    }

    #[test]
    fn zero_weight_subtree_contributes_no_rectangles() {
        let raw = parse_tree(
            r#"{"label":"root","children":[
                {"label":"empty","children":[{"label":"ghost"}]},
                {"label":"real","weight":9}
            ]}"#,
        )
        .unwrap();
        let tree = build_tree(&raw);
        let layout = compute_layout(&tree, tree.root, 200.0, 200.0, &LayoutConfig::default());
        // backdrop + the one real leaf
        assert_eq!(layout.rects.len(), 2);
    }

    #[test]
    fn degenerate_viewport_short_circuits() {
        let raw = parse_tree(r#"{"label":"root","children":[{"label":"a","weight":1}]}"#).unwrap();
        let tree = build_tree(&raw);
        let layout = compute_layout(&tree, tree.root, 0.0, 100.0, &LayoutConfig::default());
        assert_eq!(layout.rects.len(), 1); // backdrop only, no NaN rects
    }

    #[test]
    fn node_lookup_matches_rect_list() {
        let raw = parse_tree(
            r#"{"label":"root","children":[
                {"label":"a","weight":5},
                {"label":"b","weight":5}
            ]}"#,
        )
        .unwrap();
        let tree = build_tree(&raw);
        let layout = compute_layout(&tree, tree.root, 100.0, 50.0, &LayoutConfig::default());
        for (node, &idx) in &layout.node_to_rect {
            assert_eq!(layout.rects[idx].node, *node);
        }
    }
}
