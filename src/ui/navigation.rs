use crate::tree::arena::{MapTree, NodeId};

/// Compare two nodes for identity. Three tiers: arena identity, then
/// stable `path`, then label plus aggregated weight. The later tiers keep
/// the breadcrumb stack usable when the tree has been rebuilt between
/// renders (data reload). The last tier is a heuristic: two distinct
/// nodes with the same label and weight compare equal.
pub fn node_equals(tree: &MapTree, a: NodeId, b: NodeId) -> bool {
    if a == b {
        return true;
    }
    let na = tree.get(a);
    let nb = tree.get(b);
    if let (Some(pa), Some(pb)) = (na.path.as_ref(), nb.path.as_ref()) {
        if pa == pb {
            return true;
        }
    }
    !na.label.is_empty() && na.label == nb.label && na.subtree_weight == nb.subtree_weight
}

/// Zoom state: a breadcrumb stack of view roots from the global root down
/// to the current one. The global root stays at index 0 for the lifetime
/// of the widget; the tail is the current view root.
pub struct NavigationState {
    stack: Vec<NodeId>,
}

impl NavigationState {
    pub fn new(root: NodeId) -> Self {
        Self { stack: vec![root] }
    }

    /// The current view root.
    pub fn current_root(&self) -> NodeId {
        *self.stack.last().expect("breadcrumb stack never empties")
    }

    /// The breadcrumb trail, global root first.
    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drill down to a node selected somewhere in the rendered subtree.
    /// Walks the selection's ancestor chain (outermost first, selection
    /// included), keeps only the part below the current root, and appends
    /// it with push-if-unique semantics. A selected leaf is pushed too and
    /// becomes a view root with nothing beneath it; see DESIGN.md.
    /// Returns true if the view root changed.
    pub fn drill_down(&mut self, tree: &MapTree, selected: NodeId) -> bool {
        let mut chain = Vec::new();
        let mut cursor = Some(selected);
        while let Some(id) = cursor {
            chain.push(id);
            cursor = tree.get(id).parent;
        }
        chain.reverse();

        // Keep only ancestors not already represented by the current root.
        // If the current root is not on the chain at all (stale selection
        // after a reload), the whole chain is appended.
        let current = self.current_root();
        let to_push = match chain.iter().position(|&id| node_equals(tree, id, current)) {
            Some(i) => &chain[i + 1..],
            None => &chain[..],
        };

        let before = self.current_root();
        for &id in to_push {
            self.push_unique(tree, id);
        }
        !node_equals(tree, self.current_root(), before)
    }

    /// Jump to a breadcrumb by index, discarding everything deeper.
    /// Returns true if the view root changed.
    pub fn jump(&mut self, index: usize) -> bool {
        if index + 1 >= self.stack.len() {
            return false;
        }
        self.stack.truncate(index + 1);
        true
    }

    /// Step one level back up. Returns true if the view root changed;
    /// the global root is never popped.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Append a node unless an equal one is already on the stack. The
    /// global root at index 0 is covered by the same scan, so it is never
    /// pushed twice.
    fn push_unique(&mut self, tree: &MapTree, node: NodeId) {
        if self.stack.iter().any(|&s| node_equals(tree, s, node)) {
            return;
        }
        self.stack.push(node);
    }
}
