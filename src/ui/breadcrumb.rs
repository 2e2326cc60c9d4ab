use crate::tree::arena::MapTree;
use crate::ui::navigation::NavigationState;

/// One entry of the breadcrumb trail, ready for the navigation UI
/// collaborator. Clicking an entry maps to a jump to `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbEntry {
    pub index: usize,
    pub label: String,
    pub is_current: bool,
}

/// Build the breadcrumb trail for the current navigation state, global
/// root first.
pub fn trail(tree: &MapTree, nav: &NavigationState) -> Vec<BreadcrumbEntry> {
    let stack = nav.stack();
    stack
        .iter()
        .enumerate()
        .map(|(index, &id)| BreadcrumbEntry {
            index,
            label: tree.get(id).label.to_string(),
            is_current: index == stack.len() - 1,
        })
        .collect()
}
