pub mod aggregate;
pub mod arena;

use compact_str::CompactString;
use serde::{Deserialize, Deserializer};

use self::arena::{MapNode, MapTree, NodeId};

/// One node of the input tree, as produced by the report generator.
/// Numeric fields tolerate any JSON value; non-numbers read as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNode {
    pub label: String,
    pub path: String,
    pub children: Option<Vec<RawNode>>,
    #[serde(deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub size: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub change: Option<f64>,
}

impl RawNode {
    fn child_count(&self) -> usize {
        self.children.as_ref().map(|c| c.len()).unwrap_or(0)
    }
}

/// Accept any JSON value where a number is expected; strings, booleans,
/// and null all read back as `None` rather than failing the whole parse.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Skip single-child root wrappers (e.g. [root] -> [root] -> content) so
/// the first render is not a useless outer frame. Never descends into a
/// leaf: a childless root would render nothing. Runs once, before the
/// navigation state is created.
pub fn collapse_root(mut root: RawNode) -> RawNode {
    loop {
        let descend = root.child_count() == 1
            && root
                .children
                .as_ref()
                .map(|c| c[0].child_count() > 0)
                .unwrap_or(false);
        if !descend {
            return root;
        }
        root = root.children.take().and_then(|mut c| c.pop()).unwrap_or_default();
    }
}

/// Build a MapTree from an input tree. Aggregated weights are computed
/// before returning so node equality (label + weight tier) works
/// immediately.
pub fn build_tree(raw: &RawNode) -> MapTree {
    let mut tree = MapTree::with_root(node_from_raw(raw));

    // Iterative build; deep input trees must not overflow the stack.
    let mut work: Vec<(NodeId, &RawNode)> = vec![(tree.root, raw)];
    while let Some((parent_id, parent_raw)) = work.pop() {
        if let Some(children) = parent_raw.children.as_ref() {
            for child in children {
                let id = tree.add_child(parent_id, node_from_raw(child));
                work.push((id, child));
            }
        }
    }

    let total = aggregate::aggregate_weights(&mut tree);
    tracing::debug!(
        "Tree built: {} nodes, root '{}' (weight={:.0})",
        tree.len(),
        tree.get(tree.root).label,
        total
    );

    tree
}

fn node_from_raw(raw: &RawNode) -> MapNode {
    MapNode {
        label: CompactString::new(&raw.label),
        // Empty paths carry no identity; normalize them to absent so the
        // path equality tier cannot match two anonymous nodes.
        path: if raw.path.is_empty() {
            None
        } else {
            Some(CompactString::new(&raw.path))
        },
        weight: raw.weight,
        size: raw.size,
        value: raw.value,
        change: raw.change,
        subtree_weight: 0.0,
        parent: None,
        children: Vec::new(),
        depth: 0,
    }
}
