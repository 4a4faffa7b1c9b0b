//! # docex-cli
//!
//! Command-line surface for the document explorer: clap subcommands for
//! scripted folder/file operations, plus the rendering helpers (tree
//! view, file grid, formatting) shared with the interactive `docex`
//! binary.

pub mod commands;
pub mod output;
pub mod view;
