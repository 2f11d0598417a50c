//! # Reorder Planner
//!
//! Pure move computation for drag-and-drop. Given a tree, the dragged leaf's
//! source slot and a proposed drop slot, [`plan`] either returns the tree that
//! results from the move or a [`RejectReason`]. The input tree is never
//! touched; the planner edits a shallow clone, and only folders on the source
//! and destination paths get copied.
//!
//! ## Index semantics
//!
//! A drop index is an insertion slot in the destination's *current* children
//! (`0..=len`). It is interpreted as a rank among the movable (unlocked leaf)
//! entries only:
//!
//! 1. `k` = number of movable entries before the slot, not counting the
//!    dragged leaf itself.
//! 2. The leaf is removed from its source folder.
//! 3. The leaf is inserted right after the k-th movable entry of the
//!    destination, or at the very front when `k == 0`.
//!
//! Anchored entries (locked leaves and nested folders) are never moved, so
//! their relative order survives every plan:
//!
//! ```text
//! [lockedA, leafX, leafY, lockedB]  drop leafY at 0
//! [leafY, lockedA, leafX, lockedB]
//! ```

use crate::error::RejectReason;
use crate::index::TreeIndex;
use crate::model::{Node, Tree};

/// The dragged leaf and the slot it was picked up from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub leaf_id: String,
    pub parent_id: String,
    pub index: usize,
}

/// A prospective drop slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropTarget {
    pub parent_id: String,
    pub index: usize,
}

impl DropTarget {
    pub fn new(parent_id: impl Into<String>, index: usize) -> Self {
        Self {
            parent_id: parent_id.into(),
            index,
        }
    }
}

/// Outcome of a successful plan.
#[derive(Debug, Clone)]
pub struct Plan {
    pub tree: Tree,
    /// Physical index of the leaf inside the destination after the move.
    pub to_index: usize,
    /// True when the tree is unchanged.
    pub noop: bool,
}

/// Computes the tree after moving `source` to `target`.
///
/// `index` must have been built from `tree`.
pub fn plan(
    tree: &Tree,
    index: &TreeIndex,
    source: &DragSource,
    target: &DropTarget,
) -> Result<Plan, RejectReason> {
    let dest_loc = index
        .folder(&target.parent_id)
        .ok_or_else(|| RejectReason::TargetNotFound(target.parent_id.clone()))?;
    let dest = tree
        .folder_at(&dest_loc.path)
        .ok_or_else(|| RejectReason::TargetNotFound(target.parent_id.clone()))?;
    let len = dest.children().len();
    if target.index > len {
        return Err(RejectReason::InvalidIndex {
            index: target.index,
            len,
        });
    }

    let src_loc = index
        .leaf(&source.leaf_id)
        .filter(|loc| {
            loc.index == source.index && loc.parent_id.as_deref() == Some(source.parent_id.as_str())
        })
        .ok_or_else(|| RejectReason::SourceNotFound(source.leaf_id.clone()))?;
    let leaf = tree
        .folder_at(src_loc.parent_path())
        .and_then(|folder| folder.children().get(source.index))
        .and_then(Node::as_leaf)
        .ok_or_else(|| RejectReason::SourceNotFound(source.leaf_id.clone()))?;
    if leaf.is_locked() {
        return Err(RejectReason::SourceLocked(source.leaf_id.clone()));
    }

    let same_folder = source.parent_id == target.parent_id;
    if same_folder && (target.index == source.index || target.index == source.index + 1) {
        return Ok(Plan {
            tree: tree.clone(),
            to_index: source.index,
            noop: true,
        });
    }

    let rank = dest.children()[..target.index]
        .iter()
        .filter(|node| node.is_movable() && node.id() != source.leaf_id)
        .count();

    let dest_path = path_after_removal(&dest_loc.path, src_loc.parent_path(), source.index);

    let mut next = tree.clone();
    let moved = next
        .folder_at_mut(src_loc.parent_path())
        .map(|folder| folder.children.remove(source.index))
        .ok_or_else(|| RejectReason::SourceNotFound(source.leaf_id.clone()))?;
    let dest = next
        .folder_at_mut(&dest_path)
        .ok_or_else(|| RejectReason::TargetNotFound(target.parent_id.clone()))?;
    let to_index = insertion_slot(&dest.children, rank);
    dest.children.insert(to_index, moved);

    Ok(Plan {
        tree: next,
        to_index,
        noop: same_folder && to_index == source.index,
    })
}

/// Physical slot right after the `rank`-th movable entry, or the front for rank 0.
fn insertion_slot(children: &[Node], rank: usize) -> usize {
    if rank == 0 {
        return 0;
    }
    children
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_movable())
        .nth(rank - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(children.len())
}

/// Removing a child at `removed_index` from the folder at `removed_from`
/// shifts later siblings left; fix up `path` if it runs through one of them.
fn path_after_removal(path: &[usize], removed_from: &[usize], removed_index: usize) -> Vec<usize> {
    let mut adjusted = path.to_vec();
    let depth = removed_from.len();
    if path.len() > depth && path.starts_with(removed_from) && path[depth] > removed_index {
        adjusted[depth] -= 1;
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeLeaf, Folder};

    fn ids(tree: &Tree, path: &[usize]) -> Vec<String> {
        tree.folder_at(path)
            .unwrap()
            .children()
            .iter()
            .map(|n| n.id().to_string())
            .collect()
    }

    fn scenario() -> (Tree, TreeIndex) {
        let tree = Tree::new(vec![
            Folder::new("F1", "First")
                .with_leaf(AttributeLeaf::locked("lockedA", "A"))
                .with_leaf(AttributeLeaf::new("leafX", "X"))
                .with_leaf(AttributeLeaf::new("leafY", "Y"))
                .with_leaf(AttributeLeaf::locked("lockedB", "B")),
            Folder::new("F2", "Second")
                .with_leaf(AttributeLeaf::new("leafZ", "Z"))
                .with_leaf(AttributeLeaf::locked("lockedC", "C")),
            Folder::new("F3", "Empty"),
        ])
        .unwrap();
        let index = TreeIndex::build(&tree).unwrap();
        (tree, index)
    }

    fn source(index: &TreeIndex, leaf_id: &str) -> DragSource {
        let loc = index.leaf(leaf_id).unwrap();
        DragSource {
            leaf_id: leaf_id.to_string(),
            parent_id: loc.parent_id.clone().unwrap(),
            index: loc.index,
        }
    }

    #[test]
    fn drop_at_front_goes_before_locked() {
        let (tree, index) = scenario();
        let plan = plan(&tree, &index, &source(&index, "leafY"), &DropTarget::new("F1", 0)).unwrap();
        assert_eq!(ids(&plan.tree, &[0]), vec!["leafY", "lockedA", "leafX", "lockedB"]);
        assert_eq!(plan.to_index, 0);
        assert!(!plan.noop);
    }

    #[test]
    fn drop_after_trailing_locked_stays_next_to_movable_neighbour() {
        let (tree, index) = scenario();
        let plan = plan(&tree, &index, &source(&index, "leafX"), &DropTarget::new("F1", 4)).unwrap();
        assert_eq!(ids(&plan.tree, &[0]), vec!["lockedA", "leafY", "leafX", "lockedB"]);
        assert_eq!(plan.to_index, 2);
    }

    #[test]
    fn own_slot_is_a_noop() {
        let (tree, index) = scenario();
        let src = source(&index, "leafX");
        for slot in [1, 2] {
            let plan = plan(&tree, &index, &src, &DropTarget::new("F1", slot)).unwrap();
            assert!(plan.noop);
            assert_eq!(plan.tree, tree);
            assert_eq!(plan.to_index, 1);
        }
    }

    #[test]
    fn cross_folder_move() {
        let (tree, index) = scenario();
        let plan = plan(&tree, &index, &source(&index, "leafX"), &DropTarget::new("F2", 1)).unwrap();
        assert_eq!(ids(&plan.tree, &[0]), vec!["lockedA", "leafY", "lockedB"]);
        assert_eq!(ids(&plan.tree, &[1]), vec!["leafZ", "leafX", "lockedC"]);
        assert_eq!(plan.to_index, 1);
    }

    #[test]
    fn empty_folder_accepts_index_zero() {
        let (tree, index) = scenario();
        let plan = plan(&tree, &index, &source(&index, "leafZ"), &DropTarget::new("F3", 0)).unwrap();
        assert_eq!(ids(&plan.tree, &[2]), vec!["leafZ"]);
        assert_eq!(ids(&plan.tree, &[1]), vec!["lockedC"]);
    }

    #[test]
    fn rejects_unknown_target() {
        let (tree, index) = scenario();
        let err = plan(&tree, &index, &source(&index, "leafX"), &DropTarget::new("nope", 0)).unwrap_err();
        assert_eq!(err, RejectReason::TargetNotFound("nope".into()));

        // a leaf id is not a folder
        let err = plan(&tree, &index, &source(&index, "leafX"), &DropTarget::new("leafZ", 0)).unwrap_err();
        assert_eq!(err, RejectReason::TargetNotFound("leafZ".into()));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let (tree, index) = scenario();
        let err = plan(&tree, &index, &source(&index, "leafX"), &DropTarget::new("F2", 3)).unwrap_err();
        assert_eq!(err, RejectReason::InvalidIndex { index: 3, len: 2 });
    }

    #[test]
    fn rejects_locked_source() {
        let (tree, index) = scenario();
        let err = plan(&tree, &index, &source(&index, "lockedA"), &DropTarget::new("F2", 0)).unwrap_err();
        assert_eq!(err, RejectReason::SourceLocked("lockedA".into()));
    }

    #[test]
    fn rejects_stale_source() {
        let (tree, index) = scenario();
        let stale = DragSource {
            leaf_id: "leafX".into(),
            parent_id: "F1".into(),
            index: 2,
        };
        let err = plan(&tree, &index, &stale, &DropTarget::new("F2", 0)).unwrap_err();
        assert_eq!(err, RejectReason::SourceNotFound("leafX".into()));
    }

    #[test]
    fn input_tree_is_untouched() {
        let (tree, index) = scenario();
        let before = tree.clone();
        plan(&tree, &index, &source(&index, "leafY"), &DropTarget::new("F2", 0)).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn move_out_of_parent_into_later_nested_folder() {
        // Removing the leaf shifts the nested folder's position in its parent.
        let tree = Tree::new(vec![Folder::new("P", "Parent")
            .with_leaf(AttributeLeaf::new("m", "M"))
            .with_leaf(AttributeLeaf::locked("k", "K"))
            .with_folder(Folder::new("C", "Child").with_leaf(AttributeLeaf::new("c1", "C1")))])
        .unwrap();
        let index = TreeIndex::build(&tree).unwrap();
        let plan = plan(&tree, &index, &source(&index, "m"), &DropTarget::new("C", 1)).unwrap();
        assert_eq!(ids(&plan.tree, &[0]), vec!["k", "C"]);
        assert_eq!(ids(&plan.tree, &[0, 1]), vec!["c1", "m"]);
    }

    #[test]
    fn nested_folders_count_as_anchored() {
        let tree = Tree::new(vec![Folder::new("P", "Parent")
            .with_folder(Folder::new("C", "Child"))
            .with_leaf(AttributeLeaf::new("a", "A"))
            .with_leaf(AttributeLeaf::new("b", "B"))])
        .unwrap();
        let index = TreeIndex::build(&tree).unwrap();
        let plan = plan(&tree, &index, &source(&index, "b"), &DropTarget::new("P", 1)).unwrap();
        assert_eq!(ids(&plan.tree, &[0]), vec!["b", "C", "a"]);
    }

    #[test]
    fn path_adjustment_only_touches_later_siblings() {
        assert_eq!(path_after_removal(&[0, 3], &[0], 1), vec![0, 2]);
        assert_eq!(path_after_removal(&[0, 0], &[0], 1), vec![0, 0]);
        assert_eq!(path_after_removal(&[1, 3], &[0], 1), vec![1, 3]);
        assert_eq!(path_after_removal(&[0], &[0], 1), vec![0]);
    }
}
