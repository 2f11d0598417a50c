use crate::error::Result;
use crate::model::{AttributeLeaf, SelectionMode};
use crate::state::TreeState;
use std::sync::Arc;

use super::helpers::require_leaf;

/// Toggles a leaf's checked state. Returns whether it is selected afterwards.
///
/// In [`SelectionMode::Single`] selecting a leaf replaces the whole selection,
/// and toggling the selected leaf clears it.
pub fn toggle(state: &mut TreeState, leaf_id: &str, mode: SelectionMode) -> Result<bool> {
    require_leaf(state, leaf_id)?;

    let selection = Arc::make_mut(&mut state.selection);
    let was_selected = selection.contains(leaf_id);
    match mode {
        SelectionMode::Single => {
            selection.clear();
            if !was_selected {
                selection.insert(leaf_id.to_string());
            }
        }
        SelectionMode::Multi => {
            if was_selected {
                selection.remove(leaf_id);
            } else {
                selection.insert(leaf_id.to_string());
            }
        }
    }
    Ok(!was_selected)
}

pub fn is_selected(state: &TreeState, leaf_id: &str) -> bool {
    state.selection.contains(leaf_id)
}

/// Selected leaves in display order.
pub fn selected_leaves(state: &TreeState) -> Vec<&AttributeLeaf> {
    state
        .tree
        .leaves()
        .into_iter()
        .map(|(_, leaf)| leaf)
        .filter(|leaf| state.selection.contains(leaf.id()))
        .collect()
}
