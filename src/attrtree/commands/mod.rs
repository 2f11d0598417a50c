//! # Command Layer
//!
//! Business logic for every store operation, one module per concern. Each
//! function takes the [`TreeState`](crate::state::TreeState) it works on plus
//! plain arguments, and returns a plain Rust value or an
//! [`AttrTreeError`](crate::error::AttrTreeError).
//!
//! Commands validate everything before they mutate anything, so an `Err`
//! always leaves the state exactly as it was.

pub mod drag;
pub mod expand;
pub mod helpers;
pub mod remove;
pub mod rows;
pub mod search;
pub mod select;

pub use drag::MoveReport;
pub use rows::Row;
pub use search::LeafMatch;
