use compact_str::CompactString;

/// Index into the arena `Vec<MapNode>`. Uses u32 to save memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node in the repository map, stored in a flat arena.
#[derive(Debug, Clone)]
pub struct MapNode {
    /// Display name (file or directory name, not full path)
    pub label: CompactString,
    /// Optional stable identifier. Used as the second equality tier when
    /// nodes are compared across tree rebuilds.
    pub path: Option<CompactString>,
    /// Raw leaf magnitude (lines of code). Ignored for branches.
    pub weight: Option<f64>,
    /// Alias consulted when `weight` is absent.
    pub size: Option<f64>,
    /// Secondary metric (percent change), used only for leaf coloring.
    pub value: Option<f64>,
    /// Raw lines-delta over the report window. Tooltip display only.
    pub change: Option<f64>,
    /// Aggregated subtree weight. Written by the aggregator on every draw
    /// cycle, read by layout and rendering.
    pub subtree_weight: f64,
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,
    /// Child node indices, in input order
    pub children: Vec<NodeId>,
    /// Depth in the tree (root = 0)
    pub depth: u16,
}

impl MapNode {
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The repository map stored as a flat arena of nodes.
/// Children always have larger indices than their parents; the aggregator
/// relies on this.
pub struct MapTree {
    pub nodes: Vec<MapNode>,
    pub root: NodeId,
}

impl MapTree {
    /// Create a tree containing only the given root node.
    pub fn with_root(mut root: MapNode) -> Self {
        root.parent = None;
        root.depth = 0;
        MapTree {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Add a child node under the given parent. Returns the new node's ID.
    pub fn add_child(&mut self, parent: NodeId, mut node: MapNode) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.index()].depth.saturating_add(1);
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(new_id);
        new_id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> &MapNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> &mut MapNode {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty (only root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Children of a node, in input order.
    pub fn children(&self, parent: NodeId) -> &[NodeId] {
        &self.nodes[parent.index()].children
    }
}
