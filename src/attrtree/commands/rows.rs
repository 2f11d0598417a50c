use crate::index::NodeKind;
use crate::model::{Folder, Node};
use crate::state::TreeState;
use serde::Serialize;

/// One line of the flattened tree, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub label: String,
    pub depth: usize,
    pub kind: NodeKind,
    pub locked: bool,
    pub expanded: bool,
    pub selected: bool,
}

/// Rows a renderer draws: top-level folders always, children only below
/// expanded folders.
pub fn visible(state: &TreeState) -> Vec<Row> {
    flatten(state, false)
}

/// Every row, ignoring expansion.
pub fn all(state: &TreeState) -> Vec<Row> {
    flatten(state, true)
}

fn flatten(state: &TreeState, include_collapsed: bool) -> Vec<Row> {
    let mut rows = Vec::new();
    for folder in state.tree.folders() {
        push_folder(state, folder, 0, include_collapsed, &mut rows);
    }
    rows
}

fn push_folder(
    state: &TreeState,
    folder: &Folder,
    depth: usize,
    include_collapsed: bool,
    rows: &mut Vec<Row>,
) {
    let expanded = state.expanded.contains(folder.id());
    rows.push(Row {
        id: folder.id().to_string(),
        label: folder.name().to_string(),
        depth,
        kind: NodeKind::Folder,
        locked: false,
        expanded,
        selected: false,
    });

    if !expanded && !include_collapsed {
        return;
    }

    for child in folder.children() {
        match child {
            Node::Folder(sub) => push_folder(state, sub, depth + 1, include_collapsed, rows),
            Node::Leaf(leaf) => rows.push(Row {
                id: leaf.id().to_string(),
                label: leaf.display_label().to_string(),
                depth: depth + 1,
                kind: NodeKind::Leaf,
                locked: leaf.is_locked(),
                expanded: false,
                selected: state.selection.contains(leaf.id()),
            }),
        }
    }
}
