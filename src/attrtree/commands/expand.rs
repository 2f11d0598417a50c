use crate::error::Result;
use crate::state::TreeState;
use std::sync::Arc;

use super::helpers::require_folder;

/// Flips a folder between expanded and collapsed. Returns the new flag.
pub fn toggle(state: &mut TreeState, folder_id: &str) -> Result<bool> {
    require_folder(state, folder_id)?;

    let expanded = Arc::make_mut(&mut state.expanded);
    if expanded.remove(folder_id) {
        Ok(false)
    } else {
        expanded.insert(folder_id.to_string());
        Ok(true)
    }
}

pub fn is_expanded(state: &TreeState, folder_id: &str) -> bool {
    state.expanded.contains(folder_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttrTreeError;
    use crate::test_utils::sample_state;

    #[test]
    fn toggles_back_and_forth() {
        let mut state = sample_state();
        assert!(!is_expanded(&state, "contact"));
        assert!(toggle(&mut state, "contact").unwrap());
        assert!(is_expanded(&state, "contact"));
        assert!(!toggle(&mut state, "contact").unwrap());
        assert!(!is_expanded(&state, "contact"));
    }

    #[test]
    fn nested_folders_expand_independently() {
        let mut state = sample_state();
        toggle(&mut state, "address").unwrap();
        assert!(is_expanded(&state, "address"));
        assert!(!is_expanded(&state, "contact"));
    }

    #[test]
    fn unknown_folder_is_not_found_and_changes_nothing() {
        let mut state = sample_state();
        toggle(&mut state, "contact").unwrap();
        let before = state.snapshot();

        assert!(matches!(
            toggle(&mut state, "nowhere"),
            Err(AttrTreeError::NotFound(_))
        ));
        // leaves are not expandable
        assert!(matches!(
            toggle(&mut state, "email"),
            Err(AttrTreeError::NotFound(_))
        ));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn expansion_never_touches_selection() {
        let mut state = sample_state();
        Arc::make_mut(&mut state.selection).insert("phone".into());
        let selection = state.selection.clone();
        let tree = state.tree.clone();
        for _ in 0..3 {
            toggle(&mut state, "company").unwrap();
        }
        assert_eq!(state.selection, selection);
        assert_eq!(state.tree, tree);
    }
}
