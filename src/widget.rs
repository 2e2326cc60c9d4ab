use crate::data::DataSource;
use crate::layout::{self, Layout, LayoutConfig};
use crate::render::scene::{self, SceneRect};
use crate::tree::aggregate;
use crate::tree::arena::{MapTree, NodeId};
use crate::tree::{self, RawNode};
use crate::ui::breadcrumb::{self, BreadcrumbEntry};
use crate::ui::input::{self, InputAction};
use crate::ui::navigation::NavigationState;
use crate::ui::tooltip::{self, TooltipInfo};

/// Widget lifecycle phases.
#[derive(Debug, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Waiting for the data collaborator to deliver the tree
    WaitingForData,
    /// Ready to render the treemap
    Ready,
}

/// One treemap widget instance. Owns its whole state; creating several
/// instances side by side is fine. Created at mount, dropped at unmount.
pub struct TreemapWidget {
    pub phase: WidgetPhase,

    // Data
    pub tree: Option<MapTree>,
    pub layout: Option<Layout>,
    pub layout_config: LayoutConfig,

    // UI state
    pub navigation: Option<NavigationState>,
    pub hover_node: Option<NodeId>,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl TreemapWidget {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            phase: WidgetPhase::WaitingForData,
            tree: None,
            layout: None,
            layout_config: LayoutConfig::default(),
            navigation: None,
            hover_node: None,
            viewport_width,
            viewport_height,
        }
    }

    /// Initialize from a data source. Called exactly once, when the
    /// external fetch completes. On failure the error is logged and the
    /// widget stays uninitialized; no partial UI. Returns whether
    /// initialization happened.
    pub fn init_from_source(&mut self, source: &dyn DataSource) -> bool {
        match source.load() {
            Ok(raw) => {
                self.init_with_value(raw);
                true
            }
            Err(e) => {
                tracing::error!("repomap data load failed: {e:#}");
                false
            }
        }
    }

    /// Initialize from an in-memory tree. Collapses single-child root
    /// wrappers, builds the arena, and lays out the first view.
    pub fn init_with_value(&mut self, raw: RawNode) {
        let raw = tree::collapse_root(raw);
        let built = tree::build_tree(&raw);
        tracing::info!(
            "Treemap initialized: {} nodes, root '{}' (weight={:.0})",
            built.len(),
            built.get(built.root).label,
            built.get(built.root).subtree_weight
        );
        self.navigation = Some(NavigationState::new(built.root));
        self.tree = Some(built);
        self.hover_node = None;
        self.phase = WidgetPhase::Ready;
        self.relayout();
    }

    /// Recompute aggregation and layout for the current view root.
    /// Idempotent; safe to call on every draw cycle.
    pub fn relayout(&mut self) {
        if let (Some(tree), Some(nav)) = (&mut self.tree, &self.navigation) {
            aggregate::aggregate_weights(tree);
            let computed = layout::compute_layout(
                tree,
                nav.current_root(),
                self.viewport_width,
                self.viewport_height,
                &self.layout_config,
            );
            self.layout = Some(computed);
        }
    }

    /// Handle one input action from the event-wiring collaborator.
    /// All transitions are synchronous; returns whether the view changed
    /// and needs a redraw.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Hover { x, y } => {
                let hit = self.hit_test(x, y);
                let changed = hit != self.hover_node;
                self.hover_node = hit;
                changed
            }
            InputAction::Select { x, y } => match self.hit_test(x, y) {
                Some(node) => self.drill_down(node),
                None => false,
            },
            InputAction::BreadcrumbJump { index } => self.jump(index),
            InputAction::NavigateUp => self.navigate_up(),
            InputAction::Resize { width, height } => {
                self.resize(width, height);
                true
            }
        }
    }

    /// Which node is under the given point, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<NodeId> {
        self.layout
            .as_ref()
            .and_then(|layout| input::hit_test(&layout.rects, x, y))
    }

    /// Drill down into a node. Returns true if the view root changed.
    pub fn drill_down(&mut self, node: NodeId) -> bool {
        let changed = match (&self.tree, &mut self.navigation) {
            (Some(tree), Some(nav)) => nav.drill_down(tree, node),
            _ => false,
        };
        if changed {
            self.relayout();
        }
        changed
    }

    /// Jump to a breadcrumb entry. Returns true if the view root changed.
    pub fn jump(&mut self, index: usize) -> bool {
        let changed = self
            .navigation
            .as_mut()
            .map(|nav| nav.jump(index))
            .unwrap_or(false);
        if changed {
            self.relayout();
        }
        changed
    }

    /// Navigate one level up. Returns true if the view root changed.
    pub fn navigate_up(&mut self) -> bool {
        let changed = self
            .navigation
            .as_mut()
            .map(|nav| nav.pop())
            .unwrap_or(false);
        if changed {
            self.relayout();
        }
        changed
    }

    /// Handle viewport resize. Relayout runs from the same view root.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.relayout();
    }

    /// Draw commands for the rendering collaborator. Empty while
    /// uninitialized.
    pub fn build_scene(&self) -> Vec<SceneRect> {
        match (&self.tree, &self.layout) {
            (Some(tree), Some(layout)) => scene::build_scene(tree, layout, self.hover_node),
            _ => Vec::new(),
        }
    }

    /// Tooltip content for a node, for the hover UI collaborator.
    pub fn tooltip(&self, node: NodeId) -> Option<TooltipInfo> {
        self.tree
            .as_ref()
            .map(|tree| tooltip::build_tooltip(tree, node))
    }

    /// Breadcrumb trail for the navigation UI collaborator. Empty while
    /// uninitialized.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbEntry> {
        match (&self.tree, &self.navigation) {
            (Some(tree), Some(nav)) => breadcrumb::trail(tree, nav),
            _ => Vec::new(),
        }
    }
}
