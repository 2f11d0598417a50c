//! # API Facade
//!
//! [`TreeStore`] is the single entry point a presentation layer talks to. It
//! owns the tree, the expansion and selection sets, and the drag session, and
//! it is a **thin facade**: every method dispatches to a function in
//! `commands/*.rs` and returns its structured result.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Seeds** initial state (expansion, selection) and validates it
//! - **Logs** each command through `tracing`
//!
//! ## What the Facade Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `planner.rs`
//! - **Rendering**: Callers draw from [`TreeStore::snapshot`] or
//!   [`TreeStore::visible_rows`]
//! - **Persistence**: Callers store the tree and
//!   [`TreeStore::selected_leaves`] wherever they like
//!
//! ## Drag protocol
//!
//! ```text
//! Idle --begin_drag--> Dragging --update_drag_target--> Dragging
//! Dragging --commit_drag (applied or rejected) | cancel_drag--> Idle
//! ```
//!
//! A second `begin_drag` while dragging fails with `InvalidState` and leaves
//! the open session alone.

use crate::commands::{self, LeafMatch, MoveReport, Row};
use crate::config::TreeConfig;
use crate::error::{AttrTreeError, Result};
use crate::model::{AttributeLeaf, Folder, SelectionMode, Tree};
use crate::planner::DropTarget;
use crate::state::{DragSession, Snapshot, TreeState};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Headless state engine for one attribute tree.
#[derive(Debug, Clone)]
pub struct TreeStore {
    state: TreeState,
}

impl TreeStore {
    /// Store with everything collapsed and nothing selected.
    pub fn new(tree: Tree) -> Result<Self> {
        Ok(Self {
            state: TreeState::new(tree)?,
        })
    }

    /// Store seeded with expanded folders and selected leaves.
    ///
    /// Every expanded id must name a folder and every selected id a leaf.
    pub fn with_state<E, S>(tree: Tree, expanded: E, selected: S) -> Result<Self>
    where
        E: IntoIterator,
        E::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut state = TreeState::new(tree)?;

        let mut expanded_set = std::collections::BTreeSet::new();
        for id in expanded {
            let id = id.into();
            commands::helpers::require_folder(&state, &id)?;
            expanded_set.insert(id);
        }
        let mut selected_set = std::collections::BTreeSet::new();
        for id in selected {
            let id = id.into();
            commands::helpers::require_leaf(&state, &id)?;
            selected_set.insert(id);
        }

        state.expanded = Arc::new(expanded_set);
        state.selection = Arc::new(selected_set);
        Ok(Self { state })
    }

    /// Store whose expansion comes from `config.expand_on_load`.
    pub fn from_config(tree: Tree, config: &TreeConfig) -> Result<Self> {
        Self::with_state(tree, config.expand_on_load.iter().cloned(), Vec::<String>::new())
    }

    pub fn toggle_expand(&mut self, folder_id: &str) -> Result<bool> {
        let expanded = commands::expand::toggle(&mut self.state, folder_id)?;
        debug!(folder_id, expanded, "toggled expansion");
        Ok(expanded)
    }

    pub fn toggle_select(&mut self, leaf_id: &str, mode: SelectionMode) -> Result<bool> {
        let selected = commands::select::toggle(&mut self.state, leaf_id, mode)?;
        debug!(leaf_id, ?mode, selected, "toggled selection");
        Ok(selected)
    }

    pub fn begin_drag(&mut self, leaf_id: &str) -> Result<DragSession> {
        match commands::drag::begin(&mut self.state, leaf_id) {
            Ok(session) => {
                debug!(
                    leaf_id,
                    parent_id = %session.source_parent_id,
                    index = session.source_index,
                    "drag started"
                );
                Ok(session)
            }
            Err(err) => {
                debug!(leaf_id, error = %err, "drag refused");
                Err(err)
            }
        }
    }

    pub fn update_drag_target(&mut self, parent_id: &str, index: usize) -> Result<()> {
        commands::drag::update_target(&mut self.state, parent_id, index)?;
        trace!(parent_id, index, "drag target");
        Ok(())
    }

    /// Resolved landing slot for the current candidate, without applying it.
    pub fn drop_preview(&self) -> Result<DropTarget> {
        commands::drag::preview(&self.state)
    }

    pub fn commit_drag(&mut self) -> Result<MoveReport> {
        match commands::drag::commit(&mut self.state) {
            Ok(report) => {
                info!(
                    leaf_id = %report.leaf_id,
                    from = %report.from_parent_id,
                    from_index = report.from_index,
                    to = %report.to_parent_id,
                    to_index = report.to_index,
                    noop = report.is_noop(),
                    "drag committed"
                );
                Ok(report)
            }
            Err(err @ AttrTreeError::Rejected(_)) => {
                warn!(error = %err, "drop rejected");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    pub fn cancel_drag(&mut self) -> Option<DragSession> {
        let session = commands::drag::cancel(&mut self.state);
        if let Some(session) = &session {
            debug!(leaf_id = %session.leaf_id, "drag cancelled");
        }
        session
    }

    /// Removes an unlocked leaf; its id leaves the selection with it.
    pub fn remove_leaf(&mut self, leaf_id: &str) -> Result<AttributeLeaf> {
        let leaf = commands::remove::run(&mut self.state, leaf_id)?;
        info!(leaf_id, "attribute removed");
        Ok(leaf)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn tree(&self) -> &Tree {
        self.state.tree()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.state.drag.as_ref()
    }

    pub fn is_expanded(&self, folder_id: &str) -> bool {
        commands::expand::is_expanded(&self.state, folder_id)
    }

    pub fn is_selected(&self, leaf_id: &str) -> bool {
        commands::select::is_selected(&self.state, leaf_id)
    }

    /// Selected leaves in display order.
    pub fn selected_leaves(&self) -> Vec<&AttributeLeaf> {
        commands::select::selected_leaves(&self.state)
    }

    pub fn visible_rows(&self) -> Vec<Row> {
        commands::rows::visible(&self.state)
    }

    pub fn all_rows(&self) -> Vec<Row> {
        commands::rows::all(&self.state)
    }

    pub fn search(&self, term: &str) -> Vec<LeafMatch> {
        commands::search::run(&self.state, term)
    }

    pub fn leaf(&self, leaf_id: &str) -> Result<&AttributeLeaf> {
        commands::helpers::leaf_by_id(&self.state, leaf_id)
    }

    pub fn folder(&self, folder_id: &str) -> Result<&Folder> {
        commands::helpers::folder_by_id(&self.state, folder_id)
    }
}
