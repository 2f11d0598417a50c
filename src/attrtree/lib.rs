//! # Attrtree Architecture
//!
//! Attrtree is a **headless state engine** for attribute trees: folders of
//! checkable attributes that users expand, select and reorder by drag-and-drop,
//! where some attributes are locked (system-defined, never movable). It draws
//! nothing. A presentation layer renders the snapshots it produces and forwards
//! gestures back as commands.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (cli/, wired by main.rs, or any UI)                 │
//! │  - Turns gestures into commands, renders snapshots          │
//! │  - The ONLY place that knows about terminals or files       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - TreeStore: thin facade over commands                     │
//! │  - Seeds and validates initial state, logs every command    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Expansion, selection, drag protocol, removal, queries    │
//! │  - Validate first, then mutate: errors never leave residue  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Planner (planner.rs)                                       │
//! │  - Pure move computation, locked-order preserving           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locked attributes
//!
//! A leaf's `locked` flag is fixed when it is created. Locked leaves can be
//! selected but never dragged, and no reorder ever changes the relative order
//! of the locked leaves inside a folder. Drop indexes are resolved as a rank
//! among the movable leaves; see [`planner`] for the exact rule.
//!
//! ## Snapshots
//!
//! The tree and the expansion/selection sets live behind `Arc`. A
//! [`state::Snapshot`] is three pointer copies, and a committed move copies
//! only the folders on the source and destination paths.
//!
//! ## Module Overview
//!
//! - [`api`]: The `TreeStore` facade, entry point for all operations
//! - [`commands`]: Business logic for each command and query
//! - [`planner`]: Drag-and-drop move validation and computation
//! - [`model`]: Core data types (`Tree`, `Folder`, `AttributeLeaf`)
//! - [`index`]: Id to position lookup
//! - [`state`]: Mutable state, drag session and snapshots
//! - [`config`]: Configuration management
//! - [`state_file`]: JSON document used by the CLI to persist state
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod planner;
pub mod state;
pub mod state_file;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
