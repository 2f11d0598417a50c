use thiserror::Error;

/// Why the reorder planner refused a drop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("drop target folder not found: {0}")]
    TargetNotFound(String),

    #[error("drop index {index} out of range (folder has {len} children)")]
    InvalidIndex { index: usize, len: usize },

    #[error("attribute is locked and cannot move: {0}")]
    SourceLocked(String),

    #[error("dragged attribute no longer at its source position: {0}")]
    SourceNotFound(String),
}

#[derive(Error, Debug)]
pub enum AttrTreeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Attribute is locked: {0}")]
    Locked(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Move rejected: {0}")]
    Rejected(#[from] RejectReason),

    #[error("Duplicate id in tree: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AttrTreeError>;
