//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, RenameFolder};
pub use tree::{FolderNode, build_forest};
