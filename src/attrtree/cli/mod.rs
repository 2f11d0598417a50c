//! Terminal output for the `attrtree` binary. Not part of the library.

pub(crate) mod print;
