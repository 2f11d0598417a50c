//! Drag-and-drop protocol: `begin` → `update_target`* → `commit` | `cancel`.
//!
//! The tree is never touched while a session is open; only `commit` applies a
//! plan, so cancelling restores the pre-drag state exactly.

use crate::error::{AttrTreeError, Result};
use crate::planner::{self, DropTarget};
use crate::state::{DragSession, TreeState};
use serde::Serialize;

use super::helpers::{leaf_by_id, require_leaf};

/// The move a successful commit applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub leaf_id: String,
    pub from_parent_id: String,
    pub from_index: usize,
    pub to_parent_id: String,
    pub to_index: usize,
}

impl MoveReport {
    pub fn is_noop(&self) -> bool {
        self.from_parent_id == self.to_parent_id && self.from_index == self.to_index
    }
}

/// Opens a session anchored at the leaf's current position.
pub fn begin(state: &mut TreeState, leaf_id: &str) -> Result<DragSession> {
    if let Some(open) = &state.drag {
        return Err(AttrTreeError::InvalidState(format!(
            "already dragging '{}'",
            open.leaf_id
        )));
    }

    if leaf_by_id(state, leaf_id)?.is_locked() {
        return Err(AttrTreeError::Locked(leaf_id.to_string()));
    }

    let loc = require_leaf(state, leaf_id)?;
    let source_parent_id = loc
        .parent_id
        .clone()
        .ok_or_else(|| AttrTreeError::NotFound(format!("parent of '{}'", leaf_id)))?;
    let session = DragSession {
        leaf_id: leaf_id.to_string(),
        source_parent_id,
        source_index: loc.index,
        candidate: None,
    };
    state.drag = Some(session.clone());
    Ok(session)
}

/// Records where the leaf would land. Idempotent; never validates the slot.
pub fn update_target(state: &mut TreeState, parent_id: &str, index: usize) -> Result<()> {
    let session = state
        .drag
        .as_mut()
        .ok_or_else(|| AttrTreeError::InvalidState("no drag in progress".to_string()))?;
    session.candidate = Some(DropTarget::new(parent_id, index));
    Ok(())
}

/// Where the leaf would end up if the session were committed now.
pub fn preview(state: &TreeState) -> Result<DropTarget> {
    let session = state
        .drag
        .as_ref()
        .ok_or_else(|| AttrTreeError::InvalidState("no drag in progress".to_string()))?;
    let target = session.target();
    let plan = planner::plan(&state.tree, &state.index, &session.source(), &target)?;
    Ok(DropTarget::new(target.parent_id, plan.to_index))
}

/// Applies the session's move and closes the session.
///
/// A rejected plan closes the session too; the tree is left unchanged.
pub fn commit(state: &mut TreeState) -> Result<MoveReport> {
    let session = state
        .drag
        .take()
        .ok_or_else(|| AttrTreeError::InvalidState("no drag in progress".to_string()))?;
    let target = session.target();
    let plan = planner::plan(&state.tree, &state.index, &session.source(), &target)?;

    let report = MoveReport {
        leaf_id: session.leaf_id,
        from_parent_id: session.source_parent_id,
        from_index: session.source_index,
        to_parent_id: target.parent_id,
        to_index: plan.to_index,
    };
    if !plan.noop {
        state.replace_tree(plan.tree)?;
    }
    Ok(report)
}

/// Drops the session, if any. Always succeeds.
pub fn cancel(state: &mut TreeState) -> Option<DragSession> {
    state.drag.take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectReason;
    use crate::test_utils::{child_ids, sample_state};

    #[test]
    fn full_gesture_moves_leaf_across_folders() {
        let mut state = sample_state();
        let session = begin(&mut state, "phone").unwrap();
        assert_eq!(session.source_parent_id, "contact");
        assert_eq!(session.source_index, 2);

        update_target(&mut state, "company", 2).unwrap();
        let report = commit(&mut state).unwrap();

        assert_eq!(
            report,
            MoveReport {
                leaf_id: "phone".into(),
                from_parent_id: "contact".into(),
                from_index: 2,
                to_parent_id: "company".into(),
                to_index: 2,
            }
        );
        assert!(!report.is_noop());
        assert_eq!(
            child_ids(&state.tree, "company"),
            vec!["company_name", "industry", "phone"]
        );
        assert_eq!(state.index.leaf("phone").unwrap().parent_id.as_deref(), Some("company"));
        assert!(state.drag.is_none());
    }

    #[test]
    fn locked_leaf_cannot_start_a_drag() {
        let mut state = sample_state();
        assert!(matches!(
            begin(&mut state, "email"),
            Err(AttrTreeError::Locked(id)) if id == "email"
        ));
        assert!(state.drag.is_none());
    }

    #[test]
    fn unknown_leaf_cannot_start_a_drag() {
        let mut state = sample_state();
        assert!(matches!(
            begin(&mut state, "contact"),
            Err(AttrTreeError::NotFound(_))
        ));
        assert!(state.drag.is_none());
    }

    #[test]
    fn reentrant_begin_keeps_first_session() {
        let mut state = sample_state();
        begin(&mut state, "phone").unwrap();
        update_target(&mut state, "archive", 0).unwrap();

        assert!(matches!(
            begin(&mut state, "nickname"),
            Err(AttrTreeError::InvalidState(_))
        ));
        let open = state.drag.as_ref().unwrap();
        assert_eq!(open.leaf_id, "phone");
        assert_eq!(open.candidate, Some(DropTarget::new("archive", 0)));
    }

    #[test]
    fn commands_outside_a_session_are_invalid() {
        let mut state = sample_state();
        assert!(matches!(
            update_target(&mut state, "contact", 0),
            Err(AttrTreeError::InvalidState(_))
        ));
        assert!(matches!(commit(&mut state), Err(AttrTreeError::InvalidState(_))));
        assert!(matches!(preview(&state), Err(AttrTreeError::InvalidState(_))));
        assert!(cancel(&mut state).is_none());
    }

    #[test]
    fn repeated_updates_are_idempotent() {
        let mut state = sample_state();
        begin(&mut state, "nickname").unwrap();
        for _ in 0..5 {
            update_target(&mut state, "contact", 3).unwrap();
        }
        let tree = state.tree.clone();
        assert_eq!(state.drag.as_ref().unwrap().target(), DropTarget::new("contact", 3));
        assert_eq!(state.tree, tree);
    }

    #[test]
    fn commit_without_target_is_a_noop() {
        let mut state = sample_state();
        let before = state.snapshot();
        begin(&mut state, "nickname").unwrap();
        let report = commit(&mut state).unwrap();
        assert!(report.is_noop());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn rejected_commit_closes_session_and_keeps_tree() {
        let mut state = sample_state();
        let before = state.snapshot();
        begin(&mut state, "nickname").unwrap();
        update_target(&mut state, "company", 9).unwrap();

        let err = commit(&mut state).unwrap_err();
        assert!(matches!(
            err,
            AttrTreeError::Rejected(RejectReason::InvalidIndex { index: 9, len: 2 })
        ));
        assert!(state.drag.is_none());
        assert_eq!(state.snapshot(), before);

        begin(&mut state, "nickname").unwrap();
        update_target(&mut state, "ghost", 0).unwrap();
        assert!(matches!(
            commit(&mut state),
            Err(AttrTreeError::Rejected(RejectReason::TargetNotFound(_)))
        ));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn cancel_restores_pre_drag_snapshot() {
        let mut state = sample_state();
        let before = state.snapshot();
        begin(&mut state, "street").unwrap();
        update_target(&mut state, "company", 0).unwrap();
        let dropped = cancel(&mut state).unwrap();
        assert_eq!(dropped.leaf_id, "street");
        assert_eq!(state.snapshot(), before);
        assert!(state.drag.is_none());
    }

    #[test]
    fn preview_resolves_slot_without_mutating() {
        let mut state = sample_state();
        let before = state.snapshot();
        begin(&mut state, "phone").unwrap();
        update_target(&mut state, "contact", 0).unwrap();
        assert_eq!(preview(&state).unwrap(), DropTarget::new("contact", 0));

        // dropping after the trailing locked entry snaps next to nickname
        update_target(&mut state, "contact", 4).unwrap();
        assert_eq!(preview(&state).unwrap(), DropTarget::new("contact", 2));

        update_target(&mut state, "company", 7).unwrap();
        assert!(matches!(
            preview(&state),
            Err(AttrTreeError::Rejected(RejectReason::InvalidIndex { .. }))
        ));
        assert_eq!(state.snapshot(), before);
        assert!(state.drag.is_some());
    }

    #[test]
    fn moved_leaf_keeps_selection_and_expansion() {
        let mut state = sample_state();
        std::sync::Arc::make_mut(&mut state.selection).insert("street".into());
        std::sync::Arc::make_mut(&mut state.expanded).insert("address".into());
        let selection = state.selection.clone();
        let expanded = state.expanded.clone();

        begin(&mut state, "street").unwrap();
        update_target(&mut state, "archive", 0).unwrap();
        commit(&mut state).unwrap();

        assert_eq!(state.selection, selection);
        assert_eq!(state.expanded, expanded);
        assert_eq!(child_ids(&state.tree, "archive"), vec!["street"]);
        assert_eq!(child_ids(&state.tree, "address"), vec!["zip"]);
    }
}
