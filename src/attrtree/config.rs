use crate::error::Result;
use crate::model::SelectionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "attrtree.json";

/// Client configuration, stored as `attrtree.json` in a config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeConfig {
    /// Selection mode for clients that don't choose one per gesture
    #[serde(default)]
    pub selection_mode: SelectionMode,

    /// Folders expanded when a store is built from a bare tree
    #[serde(default)]
    pub expand_on_load: Vec<String>,

    /// Whether renderers mark locked attributes
    #[serde(default = "default_show_locked_marker")]
    pub show_locked_marker: bool,
}

fn default_show_locked_marker() -> bool {
    true
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            expand_on_load: Vec::new(),
            show_locked_marker: default_show_locked_marker(),
        }
    }
}

impl TreeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TreeConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
