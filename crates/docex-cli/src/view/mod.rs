//! Rendering helpers for the tree pane and the file grid.

pub mod format;
pub mod grid;
pub mod tree;
