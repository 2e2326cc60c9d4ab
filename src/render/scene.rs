use crate::layout::Layout;
use crate::render::colors::{self, AppColor};
use crate::tree::arena::{MapTree, NodeId};

/// Minimum rectangle size before a label is worth emitting; the renderer
/// still clips whatever it draws.
const MIN_LABEL_W: f32 = 32.0;
const MIN_LABEL_H: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectKind {
    Branch,
    Leaf,
}

/// One draw command for the rendering collaborator: a positioned box with
/// a fill, an optional label, and enough state for hover styling.
#[derive(Debug, Clone)]
pub struct SceneRect {
    pub node: NodeId,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub depth: u16,
    pub kind: RectKind,
    pub fill: AppColor,
    pub label: String,
    pub show_label: bool,
    pub hovered: bool,
}

/// Translate a computed layout into draw commands. The layout's first
/// rectangle is the current view root's backdrop and is not drawn; the
/// container itself stands in for it.
pub fn build_scene(tree: &MapTree, layout: &Layout, hover: Option<NodeId>) -> Vec<SceneRect> {
    let mut scene = Vec::with_capacity(layout.rects.len().saturating_sub(1));
    for rect in layout.rects.iter().skip(1) {
        let node = tree.get(rect.node);
        let kind = if node.is_branch() {
            RectKind::Branch
        } else {
            RectKind::Leaf
        };
        let fill = match kind {
            RectKind::Branch => colors::BRANCH_FILL,
            RectKind::Leaf => colors::value_color(node.value),
        };
        scene.push(SceneRect {
            node: rect.node,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            depth: rect.depth,
            kind,
            fill,
            label: node.label.to_string(),
            show_label: rect.w >= MIN_LABEL_W && rect.h >= MIN_LABEL_H,
            hovered: hover == Some(rect.node),
        });
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_tree;
    use crate::layout::{compute_layout, LayoutConfig};
    use crate::tree::build_tree;

    fn sample() -> (MapTree, Layout) {
        let raw = parse_tree(
            r#"{"label":"root","children":[
                {"label":"dir","children":[{"label":"f","weight":10,"value":-50}]},
                {"label":"g","weight":10,"value":50}
            ]}"#,
        )
        .unwrap();
        let tree = build_tree(&raw);
        let layout = compute_layout(&tree, tree.root, 400.0, 300.0, &LayoutConfig::default());
        (tree, layout)
    }

    #[test]
    fn backdrop_is_not_drawn() {
        let (tree, layout) = sample();
        let scene = build_scene(&tree, &layout, None);
        assert_eq!(scene.len(), layout.rects.len() - 1);
        assert!(scene.iter().all(|r| r.node != tree.root));
    }

    #[test]
    fn leaves_are_colored_by_value() {
        let (tree, layout) = sample();
        let scene = build_scene(&tree, &layout, None);
        let falling = scene.iter().find(|r| r.label == "f").unwrap();
        let rising = scene.iter().find(|r| r.label == "g").unwrap();
        assert_eq!(falling.kind, RectKind::Leaf);
        assert!(falling.fill.r > falling.fill.g);
        assert!(rising.fill.g > rising.fill.r);
        let dir = scene.iter().find(|r| r.label == "dir").unwrap();
        assert_eq!(dir.kind, RectKind::Branch);
        assert_eq!(dir.fill, colors::BRANCH_FILL);
    }

    #[test]
    fn hover_marks_exactly_one_rect() {
        let (tree, layout) = sample();
        let target = layout.rects[1].node;
        let scene = build_scene(&tree, &layout, Some(target));
        assert_eq!(scene.iter().filter(|r| r.hovered).count(), 1);
        assert!(scene.iter().find(|r| r.node == target).unwrap().hovered);
    }
}
