use crate::error::{AttrTreeError, Result};
use crate::index::Location;
use crate::model::{AttributeLeaf, Folder, Node};
use crate::state::TreeState;

pub fn require_folder<'a>(state: &'a TreeState, folder_id: &str) -> Result<&'a Location> {
    state
        .index
        .folder(folder_id)
        .ok_or_else(|| AttrTreeError::NotFound(format!("folder '{}'", folder_id)))
}

pub fn require_leaf<'a>(state: &'a TreeState, leaf_id: &str) -> Result<&'a Location> {
    state
        .index
        .leaf(leaf_id)
        .ok_or_else(|| AttrTreeError::NotFound(format!("attribute '{}'", leaf_id)))
}

pub fn folder_by_id<'a>(state: &'a TreeState, folder_id: &str) -> Result<&'a Folder> {
    let loc = require_folder(state, folder_id)?;
    state
        .tree
        .folder_at(&loc.path)
        .ok_or_else(|| AttrTreeError::NotFound(format!("folder '{}'", folder_id)))
}

pub fn leaf_by_id<'a>(state: &'a TreeState, leaf_id: &str) -> Result<&'a AttributeLeaf> {
    let loc = require_leaf(state, leaf_id)?;
    state
        .tree
        .folder_at(loc.parent_path())
        .and_then(|folder| folder.children().get(loc.index))
        .and_then(Node::as_leaf)
        .ok_or_else(|| AttrTreeError::NotFound(format!("attribute '{}'", leaf_id)))
}
