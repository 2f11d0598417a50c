use crate::error::Result;
use crate::index::TreeIndex;
use crate::model::Tree;
use crate::planner::{DragSource, DropTarget};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// An in-progress drag, alive between `begin_drag` and commit/cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub leaf_id: String,
    pub source_parent_id: String,
    pub source_index: usize,
    pub candidate: Option<DropTarget>,
}

impl DragSession {
    pub fn source(&self) -> DragSource {
        DragSource {
            leaf_id: self.leaf_id.clone(),
            parent_id: self.source_parent_id.clone(),
            index: self.source_index,
        }
    }

    /// The candidate drop slot, or the source slot if none was recorded yet.
    pub fn target(&self) -> DropTarget {
        self.candidate
            .clone()
            .unwrap_or_else(|| DropTarget::new(self.source_parent_id.clone(), self.source_index))
    }
}

/// Immutable view handed to renderers. Cloning is O(1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tree: Arc<Tree>,
    pub expanded: Arc<BTreeSet<String>>,
    pub selection: Arc<BTreeSet<String>>,
}

/// Everything the commands operate on.
///
/// The tree and both sets live behind `Arc` so snapshots share them; commands
/// mutate through `Arc::make_mut`, which copies only while a snapshot is alive.
#[derive(Debug, Clone)]
pub struct TreeState {
    pub(crate) tree: Arc<Tree>,
    pub(crate) index: TreeIndex,
    pub(crate) expanded: Arc<BTreeSet<String>>,
    pub(crate) selection: Arc<BTreeSet<String>>,
    pub(crate) drag: Option<DragSession>,
}

impl TreeState {
    pub fn new(tree: Tree) -> Result<Self> {
        let index = TreeIndex::build(&tree)?;
        Ok(Self {
            tree: Arc::new(tree),
            index,
            expanded: Arc::default(),
            selection: Arc::default(),
            drag: None,
        })
    }

    /// Swaps in a new tree and reindexes it.
    pub(crate) fn replace_tree(&mut self, tree: Tree) -> Result<()> {
        self.index = TreeIndex::build(&tree)?;
        self.tree = Arc::new(tree);
        Ok(())
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tree: Arc::clone(&self.tree),
            expanded: Arc::clone(&self.expanded),
            selection: Arc::clone(&self.selection),
        }
    }
}
