//! # State Document
//!
//! The core keeps no persisted format of its own; this module is the JSON
//! document the bundled CLI uses to carry a tree and its UI state between runs:
//!
//! ```text
//! {
//!   "tree": { "folders": [ { "id", "name", "children": [ { "kind": "leaf", ... } ] } ] },
//!   "expanded": ["contact"],      # optional
//!   "selected": ["phone"]         # optional
//! }
//! ```
//!
//! A document without `expanded` falls back to the config's `expand_on_load`.

use crate::api::TreeStore;
use crate::config::TreeConfig;
use crate::error::Result;
use crate::model::Tree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateDocument {
    pub tree: Tree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<BTreeSet<String>>,
    #[serde(default)]
    pub selected: BTreeSet<String>,
}

impl StateDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Captures a store's current tree and UI state.
    pub fn from_store(store: &TreeStore) -> Self {
        let snapshot = store.snapshot();
        Self {
            tree: (*snapshot.tree).clone(),
            expanded: Some((*snapshot.expanded).clone()),
            selected: (*snapshot.selection).clone(),
        }
    }

    pub fn into_store(self, config: &TreeConfig) -> Result<TreeStore> {
        let expanded = match self.expanded {
            Some(expanded) => expanded,
            None => config.expand_on_load.iter().cloned().collect(),
        };
        TreeStore::with_state(self.tree, expanded, self.selected)
    }
}
