//! # Id Index
//!
//! Commands address nodes by their stable string id, while the tree itself is
//! addressed by position. [`TreeIndex`] maps one onto the other: for every id it
//! records the node kind, its parent folder and its position among siblings,
//! plus the full path of positions from the root so the node can be reached in
//! O(depth) without searching.
//!
//! The index is derived data. It is rebuilt from scratch after every structural
//! change, which keeps it trivially consistent with the tree it describes.

use crate::error::{AttrTreeError, Result};
use crate::model::{Folder, Node, Tree};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Leaf,
}

/// Where a node lives in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub kind: NodeKind,
    /// `None` only for top-level folders.
    pub parent_id: Option<String>,
    /// Position among the parent's children (or among top-level folders).
    pub index: usize,
    /// Positions from the root down to and including this node.
    pub path: Vec<usize>,
}

impl Location {
    /// Path of the containing folder (empty for top-level folders).
    pub fn parent_path(&self) -> &[usize] {
        &self.path[..self.path.len().saturating_sub(1)]
    }

    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    entries: HashMap<String, Location>,
}

impl TreeIndex {
    /// Indexes every node. Fails on the first id seen twice.
    pub fn build(tree: &Tree) -> Result<Self> {
        let mut index = TreeIndex::default();
        for (i, folder) in tree.folders().iter().enumerate() {
            index.insert_folder(folder, None, i, vec![i])?;
        }
        Ok(index)
    }

    fn insert_folder(
        &mut self,
        folder: &Folder,
        parent_id: Option<&str>,
        index: usize,
        path: Vec<usize>,
    ) -> Result<()> {
        self.insert(
            folder.id(),
            Location {
                kind: NodeKind::Folder,
                parent_id: parent_id.map(str::to_string),
                index,
                path: path.clone(),
            },
        )?;

        for (i, child) in folder.children().iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(i);
            match child {
                Node::Folder(sub) => self.insert_folder(sub, Some(folder.id()), i, child_path)?,
                Node::Leaf(leaf) => self.insert(
                    leaf.id(),
                    Location {
                        kind: NodeKind::Leaf,
                        parent_id: Some(folder.id().to_string()),
                        index: i,
                        path: child_path,
                    },
                )?,
            }
        }
        Ok(())
    }

    fn insert(&mut self, id: &str, location: Location) -> Result<()> {
        if self.entries.contains_key(id) {
            return Err(AttrTreeError::DuplicateId(id.to_string()));
        }
        self.entries.insert(id.to_string(), location);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.entries.get(id)
    }

    /// Location of `id` if it names a folder.
    pub fn folder(&self, id: &str) -> Option<&Location> {
        self.get(id).filter(|loc| loc.kind == NodeKind::Folder)
    }

    /// Location of `id` if it names a leaf.
    pub fn leaf(&self, id: &str) -> Option<&Location> {
        self.get(id).filter(|loc| loc.kind == NodeKind::Leaf)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
