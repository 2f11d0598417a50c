use crate::index::TreeIndex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// How `toggle_select` treats the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one leaf is selected at a time.
    Single,
    /// Any subset of leaves may be selected.
    #[default]
    Multi,
}

/// A selectable attribute. Locked attributes are system-defined and never move.
///
/// `locked` is fixed at construction: there is deliberately no setter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeLeaf {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    // Internal name, shown when no label is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    locked: bool,
}

impl AttributeLeaf {
    /// A user-movable attribute.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            name: None,
            locked: false,
        }
    }

    /// A system attribute that can never be dragged.
    pub fn locked(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            locked: true,
            ..Self::new(id, label)
        }
    }

    /// An attribute without a label, displayed by its internal name.
    pub fn named(id: impl Into<String>, name: impl Into<String>, locked: bool) -> Self {
        Self {
            id: id.into(),
            label: None,
            name: Some(name.into()),
            locked,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Label, falling back to the internal name, then to the id.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// An expandable container of leaves and nested folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    id: String,
    name: String,
    #[serde(default)]
    pub(crate) children: Vec<Node>,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_leaf(mut self, leaf: AttributeLeaf) -> Self {
        self.children.push(Node::Leaf(leaf));
        self
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.children.push(Node::Folder(Arc::new(folder)));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in display (and drag) order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Ids of the locked leaves directly inside this folder, in order.
    pub fn locked_ids(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(Node::as_leaf)
            .filter(|leaf| leaf.is_locked())
            .map(AttributeLeaf::id)
            .collect()
    }

    /// Ids of the movable leaves directly inside this folder, in order.
    pub fn movable_ids(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter(|node| node.is_movable())
            .map(Node::id)
            .collect()
    }
}

/// A child of a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Folder(Arc<Folder>),
    Leaf(AttributeLeaf),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Folder(folder) => folder.id(),
            Node::Leaf(leaf) => leaf.id(),
        }
    }

    /// Only unlocked leaves can be dragged. Folders and locked leaves stay
    /// anchored in place during every reorder.
    pub fn is_movable(&self) -> bool {
        matches!(self, Node::Leaf(leaf) if !leaf.is_locked())
    }

    pub fn as_leaf(&self) -> Option<&AttributeLeaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::Leaf(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct TreeDocument {
    folders: Vec<Arc<Folder>>,
}

/// The root of the hierarchy: an ordered list of top-level folders.
///
/// Folders sit behind `Arc`, so cloning a tree is shallow and a mutation only
/// copies the folders on its path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tree {
    folders: Vec<Arc<Folder>>,
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = TreeDocument::deserialize(deserializer)?;
        let tree = Tree {
            folders: doc.folders,
        };
        TreeIndex::build(&tree).map_err(D::Error::custom)?;
        Ok(tree)
    }
}

impl Tree {
    /// Builds a tree, rejecting duplicate ids anywhere in the hierarchy.
    pub fn new(folders: Vec<Folder>) -> crate::error::Result<Self> {
        let tree = Tree {
            folders: folders.into_iter().map(Arc::new).collect(),
        };
        TreeIndex::build(&tree)?;
        Ok(tree)
    }

    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn folders(&self) -> &[Arc<Folder>] {
        &self.folders
    }

    /// Follows a path of child positions from the root to a folder.
    pub(crate) fn folder_at(&self, path: &[usize]) -> Option<&Folder> {
        let (first, rest) = path.split_first()?;
        let mut folder: &Folder = self.folders.get(*first)?;
        for &i in rest {
            folder = folder.children.get(i)?.as_folder()?;
        }
        Some(folder)
    }

    /// Mutable variant of [`Tree::folder_at`]. Every folder on the path is
    /// copied if a snapshot still shares it.
    pub(crate) fn folder_at_mut(&mut self, path: &[usize]) -> Option<&mut Folder> {
        let (first, rest) = path.split_first()?;
        let mut folder = Arc::make_mut(self.folders.get_mut(*first)?);
        for &i in rest {
            folder = match folder.children.get_mut(i)? {
                Node::Folder(child) => Arc::make_mut(child),
                Node::Leaf(_) => return None,
            };
        }
        Some(folder)
    }

    /// Every leaf with its parent folder, depth-first in display order.
    pub fn leaves(&self) -> Vec<(&Folder, &AttributeLeaf)> {
        fn collect<'a>(folder: &'a Folder, out: &mut Vec<(&'a Folder, &'a AttributeLeaf)>) {
            for child in &folder.children {
                match child {
                    Node::Leaf(leaf) => out.push((folder, leaf)),
                    Node::Folder(sub) => collect(sub, out),
                }
            }
        }

        let mut out = Vec::new();
        for folder in &self.folders {
            collect(folder, &mut out);
        }
        out
    }

    /// Every folder, depth-first in display order.
    pub fn all_folders(&self) -> Vec<&Folder> {
        fn collect<'a>(folder: &'a Folder, out: &mut Vec<&'a Folder>) {
            out.push(folder);
            for sub in folder.children.iter().filter_map(Node::as_folder) {
                collect(sub, out);
            }
        }

        let mut out = Vec::new();
        for folder in &self.folders {
            collect(folder, &mut out);
        }
        out
    }
}
