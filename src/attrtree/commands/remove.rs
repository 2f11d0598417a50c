use crate::error::{AttrTreeError, Result};
use crate::model::{AttributeLeaf, Node};
use crate::state::TreeState;
use std::sync::Arc;

use super::helpers::{leaf_by_id, require_leaf};

/// Removes an unlocked leaf and evicts it from the selection.
///
/// Refused while a drag is open, since the session holds positions that a
/// removal could shift.
pub fn run(state: &mut TreeState, leaf_id: &str) -> Result<AttributeLeaf> {
    if let Some(open) = &state.drag {
        return Err(AttrTreeError::InvalidState(format!(
            "cannot remove while dragging '{}'",
            open.leaf_id
        )));
    }
    if leaf_by_id(state, leaf_id)?.is_locked() {
        return Err(AttrTreeError::Locked(leaf_id.to_string()));
    }

    let loc = require_leaf(state, leaf_id)?.clone();
    let mut tree = (*state.tree).clone();
    let removed = tree
        .folder_at_mut(loc.parent_path())
        .map(|folder| folder.children.remove(loc.index))
        .ok_or_else(|| AttrTreeError::NotFound(format!("attribute '{}'", leaf_id)))?;
    let leaf = match removed {
        Node::Leaf(leaf) => leaf,
        Node::Folder(_) => {
            return Err(AttrTreeError::NotFound(format!("attribute '{}'", leaf_id)));
        }
    };

    state.replace_tree(tree)?;
    if state.selection.contains(leaf_id) {
        Arc::make_mut(&mut state.selection).remove(leaf_id);
    }
    Ok(leaf)
}
